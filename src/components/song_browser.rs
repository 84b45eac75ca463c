use crate::api::*;
use crate::catalog::{Catalog, FetchOutcome};
use crate::components::{AudioElement, Icon, PlaybackCoordinator, SearchBar, SongCard};
use dioxus::prelude::*;

#[component]
pub fn SongBrowser() -> Element {
    let config = use_context::<Signal<ApiConfig>>();

    let search_text = use_signal(String::new);
    let mut catalog = use_signal(Catalog::new);
    let coordinator = use_signal(PlaybackCoordinator::<AudioElement>::new);

    // Only a page change re-runs the fetch effect, not every catalog write.
    let page = use_memo(move || catalog.read().page());

    use_effect(move || {
        let page = page();
        let config = config.peek().clone();
        catalog.write().begin_fetch();
        tracing::debug!(page, "loading songs");

        // Scoped to this component, so the task is dropped with the view.
        spawn(async move {
            let client = SongsClient::new(config);
            let result = client.fetch_page(page).await;
            match catalog.write().finish_fetch(result) {
                FetchOutcome::Appended(count) => {
                    tracing::debug!(page, count, "appended songs")
                }
                FetchOutcome::Exhausted => tracing::debug!(page, "no more songs"),
                FetchOutcome::Failed => {}
            }
        });
    });

    rsx! {
        SongBrowserView { catalog, search_text, coordinator }
    }
}

/// Header, search, card grid and the Load More control for a catalog.
#[component]
pub fn SongBrowserView(
    catalog: Signal<Catalog>,
    search_text: Signal<String>,
    coordinator: Signal<PlaybackCoordinator<AudioElement>>,
) -> Element {
    let mut catalog = catalog;

    let query = search_text();
    let playing_slot = coordinator.read().playing_slot();
    let catalog_ref = catalog.read();
    let loading = catalog_ref.is_loading();
    let has_more = catalog_ref.has_more();
    let cards: Vec<(String, usize, bool, Song)> = catalog_ref
        .filtered(&query)
        .into_iter()
        .map(|(slot, song)| {
            let key = format!("{}-{}", song.id, slot);
            let is_playing = playing_slot == Some(slot);
            (key, slot, is_playing, song.clone())
        })
        .collect();
    drop(catalog_ref);

    let button_class = if loading {
        "bg-gray-700 cursor-not-allowed"
    } else {
        "bg-gradient-to-r from-purple-600 to-pink-600 hover:from-purple-700 hover:to-pink-700 shadow-lg hover:shadow-purple-500/20"
    };

    rsx! {
        div { class: "wrapper max-w-6xl mx-auto p-4",
            header { class: "text-center py-8",
                div { class: "flex justify-center mb-4",
                    div { class: "h-16 w-16 bg-gradient-to-br from-purple-500 to-pink-600 rounded-2xl flex items-center justify-center shadow-lg",
                        Icon {
                            name: "music".to_string(),
                            class: "h-8 w-8 text-white".to_string(),
                        }
                    }
                }
                h1 { class: "text-4xl font-bold mb-2",
                    "Find "
                    span { class: "bg-gradient-to-r from-purple-400 to-pink-500 bg-clip-text text-transparent",
                        "Songs"
                    }
                    " You'll Enjoy Without The Hassle"
                }
                p { class: "text-gray-400 max-w-2xl mx-auto",
                    "Discover your next favorite track from our curated collection of music"
                }
            }

            SearchBar { search_text }

            div { class: "mt-12",
                if cards.is_empty() {
                    div { class: "text-center py-16 bg-gray-800/40 backdrop-blur-sm rounded-xl border border-gray-700/50",
                        Icon {
                            name: "music".to_string(),
                            class: "h-12 w-12 text-gray-500 mx-auto mb-4".to_string(),
                        }
                        p { class: "text-gray-400 text-lg",
                            if query.is_empty() {
                                "No songs available yet."
                            } else {
                                "No songs match your search."
                            }
                        }
                    }
                } else {
                    div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6",
                        for (key , slot , is_playing , song) in cards {
                            SongCard {
                                key: "{key}",
                                is_playing,
                                song,
                                slot,
                                coordinator,
                            }
                        }
                    }
                }

                if has_more {
                    div { class: "text-center mt-10 mb-12",
                        button {
                            class: "px-6 py-3 rounded-full text-white font-medium flex items-center gap-2 mx-auto {button_class}",
                            disabled: loading,
                            onclick: move |_| {
                                catalog.write().advance_page();
                            },
                            if loading {
                                Icon {
                                    name: "loader".to_string(),
                                    class: "h-5 w-5".to_string(),
                                }
                                span { "Loading..." }
                            } else {
                                span { "Load More" }
                                Icon {
                                    name: "chevron-down".to_string(),
                                    class: "h-5 w-5".to_string(),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, Page};
    use std::time::Duration;

    fn song(id: u64, title: &str, artist: &str) -> Song {
        Song {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            album: "Album".to_string(),
            release_date: "2020".to_string(),
            image_url: format!("https://img.test/{id}.jpg"),
            audio_url: format!("https://audio.test/{id}.mp3"),
        }
    }

    fn page_of(range: std::ops::Range<u64>) -> Page {
        Page {
            songs: range.map(|id| song(id, &format!("Track {id}"), "Various")).collect(),
            skipped: 0,
        }
    }

    fn loaded(results: Vec<Result<Page, ApiError>>) -> Catalog {
        let mut catalog = Catalog::new();
        for (index, result) in results.into_iter().enumerate() {
            if index > 0 {
                catalog.advance_page();
            }
            catalog.begin_fetch();
            catalog.finish_fetch(result);
        }
        catalog
    }

    #[component]
    fn PresetBrowser(catalog: Catalog, query: String) -> Element {
        let catalog = use_signal(move || catalog);
        let search_text = use_signal(move || query);
        let coordinator = use_signal(PlaybackCoordinator::<AudioElement>::new);
        rsx! {
            SongBrowserView { catalog, search_text, coordinator }
        }
    }

    fn render_view(catalog: Catalog, query: &str) -> String {
        let mut dom = VirtualDom::new_with_props(
            PresetBrowser,
            PresetBrowserProps {
                catalog,
                query: query.to_string(),
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn card_count(html: &str) -> usize {
        html.matches("songgrid-audio-").count()
    }

    #[test]
    fn fresh_catalog_shows_empty_state_and_load_more() {
        let html = render_view(Catalog::new(), "");
        assert!(html.contains("No songs available yet."));
        assert!(html.contains("Load More"));
        assert_eq!(card_count(&html), 0);
    }

    #[test]
    fn spinner_shows_while_fetching() {
        let mut catalog = Catalog::new();
        catalog.begin_fetch();
        let html = render_view(catalog, "");
        assert!(html.contains("Loading..."));
        assert!(!html.contains("Load More"));
    }

    #[test]
    fn failed_fetch_clears_spinner_and_keeps_cards() {
        let catalog = loaded(vec![Ok(page_of(0..4)), Err(ApiError::Status(500))]);
        let html = render_view(catalog, "");
        assert!(!html.contains("Loading..."));
        assert!(html.contains("Load More"));
        assert_eq!(card_count(&html), 4);
    }

    #[test]
    fn three_load_cycles_render_twenty_cards_without_load_more() {
        let catalog = loaded(vec![
            Ok(page_of(0..12)),
            Ok(page_of(12..20)),
            Ok(Page::default()),
        ]);
        let html = render_view(catalog, "");
        assert_eq!(card_count(&html), 20);
        assert!(!html.contains("Load More"));
        assert!(!html.contains("Loading..."));
    }

    #[test]
    fn query_narrows_the_grid() {
        let mut songs: Vec<Song> = (0..18)
            .map(|id| song(id, &format!("Filler {id}"), "Someone"))
            .collect();
        songs.push(song(100, "Moonlight Sonata", "Beethoven"));
        songs.push(song(101, "Sunrise", "Norah Jones"));
        let catalog = loaded(vec![Ok(Page { songs, skipped: 0 })]);

        let html = render_view(catalog, "MOON");
        assert_eq!(card_count(&html), 1);
        assert!(html.contains("Moonlight Sonata"));
        assert!(!html.contains("Sunrise"));
        assert!(html.contains("value=\"MOON\""));
    }

    #[test]
    fn unmatched_query_shows_search_empty_state() {
        let catalog = loaded(vec![Ok(page_of(0..3))]);
        let html = render_view(catalog, "zzz");
        assert!(html.contains("No songs match your search."));
        assert_eq!(card_count(&html), 0);
    }

    #[component]
    fn LiveBrowser(config: ApiConfig) -> Element {
        let config = use_signal(move || config);
        use_context_provider(|| config);
        rsx! {
            SongBrowser {}
        }
    }

    /// Drive the dom until the listing was requested and `done` holds for the
    /// markup, or the budget runs out.
    async fn settle(
        dom: &mut VirtualDom,
        listing: &mockito::Mock,
        done: impl Fn(&str) -> bool,
    ) -> String {
        for _ in 0..50 {
            let _ = tokio::time::timeout(Duration::from_millis(100), dom.wait_for_work()).await;
            dom.render_immediate(&mut dioxus::core::NoOpMutations);

            let html = dioxus_ssr::render(dom);
            if listing.matched_async().await && done(&html) {
                return html;
            }
        }
        dioxus_ssr::render(dom)
    }

    fn live_dom(server: &mockito::Server) -> VirtualDom {
        let config = ApiConfig::new(format!("{}/music/my-api", server.url()));
        let mut dom = VirtualDom::new_with_props(LiveBrowser, LiveBrowserProps { config });
        dom.rebuild_in_place();
        dom
    }

    #[tokio::test]
    async fn server_error_leaves_the_browser_usable() {
        let mut server = mockito::Server::new_async().await;
        let listing = server
            .mock("GET", "/music/my-api")
            .match_query(mockito::Matcher::UrlEncoded("page".into(), "1".into()))
            .with_status(500)
            .create_async()
            .await;

        let mut dom = live_dom(&server);
        let html = settle(&mut dom, &listing, |html| {
            html.contains("Load More")
        }).await;

        listing.assert_async().await;
        assert!(html.contains("Load More"));
        assert!(!html.contains("Loading..."));
        assert!(html.contains("No songs available yet."));
    }

    #[tokio::test]
    async fn first_page_is_fetched_on_mount() {
        let mut server = mockito::Server::new_async().await;
        let listing = server
            .mock("GET", "/music/my-api")
            .match_query(mockito::Matcher::UrlEncoded("page".into(), "1".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"id": 1, "songTitle": "Moonlight Sonata", "artistName": "Beethoven", "songUrl": "a"},
                    {"id": 2, "songTitle": "Sunrise", "artistName": "Norah Jones", "songUrl": "b"}
                ]"#,
            )
            .create_async()
            .await;

        let mut dom = live_dom(&server);
        let html = settle(&mut dom, &listing, |html| {
            card_count(html) == 2 && html.contains("Load More")
        }).await;

        listing.assert_async().await;
        assert_eq!(card_count(&html), 2);
        assert!(html.contains("Moonlight Sonata"));
        assert!(html.contains("Sunrise"));
    }

    #[tokio::test]
    async fn empty_first_page_hides_load_more() {
        let mut server = mockito::Server::new_async().await;
        let listing = server
            .mock("GET", "/music/my-api")
            .match_query(mockito::Matcher::UrlEncoded("page".into(), "1".into()))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let mut dom = live_dom(&server);
        let html = settle(&mut dom, &listing, |html| {
            !html.contains("Load More") && !html.contains("Loading...")
        })
        .await;

        listing.assert_async().await;
        assert!(!html.contains("Load More"));
        assert!(!html.contains("Loading..."));
    }
}
