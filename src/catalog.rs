//! Song list accumulation, pagination and filtering for the browser view.

use crate::api::{ApiError, Page, Song};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Appended(usize),
    Exhausted,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    songs: Vec<Song>,
    page: u32,
    loading: bool,
    has_more: bool,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            songs: Vec::new(),
            page: 1,
            loading: false,
            has_more: true,
        }
    }

    #[cfg(test)]
    fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Mark a fetch as in flight and return the page it should request.
    pub fn begin_fetch(&mut self) -> u32 {
        self.loading = true;
        self.page
    }

    pub fn finish_fetch(&mut self, result: Result<Page, ApiError>) -> FetchOutcome {
        self.loading = false;

        match result {
            Err(err) => {
                tracing::error!(page = self.page, "Fetch Error: {err}");
                FetchOutcome::Failed
            }
            Ok(page) if page.is_end() => {
                self.has_more = false;
                FetchOutcome::Exhausted
            }
            Ok(page) => {
                let count = page.songs.len();
                self.songs.extend(page.songs);
                FetchOutcome::Appended(count)
            }
        }
    }

    /// Move to the next page unless a fetch is running or the end was reached.
    pub fn advance_page(&mut self) -> bool {
        if self.loading || !self.has_more {
            return false;
        }
        self.page += 1;
        true
    }

    /// Songs matching `query`, paired with their position in the full list.
    pub fn filtered(&self, query: &str) -> Vec<(usize, &Song)> {
        self.songs
            .iter()
            .enumerate()
            .filter(|(_, song)| matches_query(song, query))
            .collect()
    }
}

pub fn matches_query(song: &Song, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    song.title.to_lowercase().contains(&query) || song.artist.to_lowercase().contains(&query)
}
