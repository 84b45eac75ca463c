use crate::api::Song;
use crate::components::{
    audio_dom_id, find_audio_element, AudioElement, Icon, PlaybackCoordinator,
};
use dioxus::prelude::*;

const FALLBACK_COVER: Asset = asset!("/assets/fallback-cover.svg");

fn cover_src(image_url: &str, failed: bool) -> String {
    if failed || image_url.trim().is_empty() {
        FALLBACK_COVER.to_string()
    } else {
        image_url.to_string()
    }
}

/// Cover art that swaps to the bundled placeholder the first time it fails.
#[component]
pub fn CoverImage(song: Song, class: String) -> Element {
    let mut failed = use_signal(|| song.image_url.trim().is_empty());

    let src = cover_src(&song.image_url, failed());
    let alt = song.title.clone();

    rsx! {
        img {
            src: "{src}",
            alt: "{alt}",
            class: "{class}",
            loading: "lazy",
            onerror: move |_| {
                // No retry, and a broken placeholder must not loop.
                if failed() {
                    return;
                }
                tracing::warn!(
                    "Image failed to load: {} for \"{}\" by {}",
                    song.image_url,
                    song.title,
                    song.artist
                );
                failed.set(true);
            },
        }
    }
}

#[component]
pub fn SongCard(
    song: Song,
    slot: usize,
    is_playing: bool,
    coordinator: Signal<PlaybackCoordinator<AudioElement>>,
) -> Element {
    let mut coordinator = coordinator;
    let song_id = song.id;
    let dom_id = audio_dom_id(slot);

    use_drop(move || {
        // The browser may already be gone when the whole view is torn down.
        if let Ok(mut registry) = coordinator.try_write() {
            registry.deregister(slot);
        }
    });

    let ring = if is_playing { "ring-2 ring-purple-500" } else { "" };
    let mount_id = dom_id.clone();

    rsx! {
        div { class: "bg-gray-800/70 backdrop-blur-sm rounded-xl overflow-hidden shadow-lg hover:shadow-xl transition-all duration-300 border border-gray-700/50 group {ring}",
            div { class: "relative h-48 overflow-hidden",
                CoverImage {
                    song: song.clone(),
                    class: "w-full h-full object-cover transition-transform duration-300 group-hover:scale-105".to_string(),
                }
                div { class: "absolute inset-0 bg-gradient-to-t from-black/70 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex items-end justify-start p-4",
                    div { class: "text-white",
                        p { class: "text-sm font-medium", "{song.album}" }
                        p { class: "text-xs opacity-75", "{song.release_date}" }
                    }
                }
            }
            div { class: "p-4 flex flex-col gap-3",
                div { class: "flex items-center gap-2",
                    if is_playing {
                        Icon {
                            name: "play".to_string(),
                            class: "h-4 w-4 text-purple-400".to_string(),
                        }
                    }
                    div {
                        h2 { class: "text-lg font-semibold text-white truncate", "{song.title}" }
                        p { class: "text-gray-400 text-sm", "{song.artist}" }
                    }
                }
                audio {
                    id: "{dom_id}",
                    controls: true,
                    preload: "metadata",
                    src: "{song.audio_url}",
                    class: "w-full h-10 mt-2",
                    onmounted: move |_| {
                        match find_audio_element(&mount_id) {
                            Some(handle) => coordinator.write().register(slot, song_id, handle),
                            None => tracing::debug!(song_id, "audio element not found after mount"),
                        }
                    },
                    onplay: move |_| coordinator.write().on_play(slot, song_id),
                    onpause: move |_| coordinator.write().on_stopped(slot),
                    onended: move |_| coordinator.write().on_stopped(slot),
                }
            }
        }
    }
}
