use crate::api::models::*;
use once_cell::sync::Lazy;
use thiserror::Error;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error! Status: {0}")]
    Status(u16),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON array of songs")]
    NotAnArray,
}

/// One batch of songs returned by the listing endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub songs: Vec<Song>,
    /// Entries that were present in the payload but could not be decoded.
    pub skipped: usize,
}

impl Page {
    /// An empty array is how the endpoint signals there is nothing left.
    pub fn is_end(&self) -> bool {
        self.songs.is_empty() && self.skipped == 0
    }
}

pub struct SongsClient {
    pub config: ApiConfig,
}

impl SongsClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn page_url(&self, page: u32) -> String {
        format!("{}?page={}", self.config.base_url, page)
    }

    pub async fn fetch_page(&self, page: u32) -> Result<Page, ApiError> {
        let url = self.page_url(page);
        tracing::debug!(%url, "fetching songs");

        let response = HTTP_CLIENT.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_page(&body)
    }
}

/// Decode a listing payload, dropping entries that are not valid songs.
pub fn parse_page(body: &str) -> Result<Page, ApiError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let serde_json::Value::Array(entries) = value else {
        return Err(ApiError::NotAnArray);
    };

    let mut page = Page {
        songs: Vec::with_capacity(entries.len()),
        skipped: 0,
    };
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<Song>(entry) {
            Ok(song) => page.songs.push(song),
            Err(err) => {
                tracing::warn!(index, "skipping malformed song entry: {err}");
                page.skipped += 1;
            }
        }
    }

    Ok(page)
}
