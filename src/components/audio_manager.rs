//! Audio Manager - keeps the per-card audio elements in step so only one plays.
//! Cards register their element when mounted; the browser view owns the registry.

use std::collections::HashMap;

#[cfg(not(target_arch = "wasm32"))]
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement, HtmlMediaElement};

/// Something that can be paused and rewound, usually an `<audio>` element.
pub trait AudioHandle {
    fn is_paused(&self) -> bool;
    fn pause(&self);
    fn seek(&self, position: f64);

    fn stop(&self) {
        self.pause();
        self.seek(0.0);
    }
}

pub fn audio_dom_id(slot: usize) -> String {
    format!("songgrid-audio-{slot}")
}

#[cfg(target_arch = "wasm32")]
pub type AudioElement = HtmlAudioElement;

#[cfg(target_arch = "wasm32")]
impl AudioHandle for HtmlAudioElement {
    fn is_paused(&self) -> bool {
        self.paused()
    }

    fn pause(&self) {
        let media: &HtmlMediaElement = self;
        if let Err(err) = media.pause() {
            tracing::debug!(?err, "audio element refused to pause");
        }
    }

    fn seek(&self, position: f64) {
        self.set_current_time(position);
    }
}

/// Look up the audio element a card rendered under `dom_id`.
#[cfg(target_arch = "wasm32")]
pub fn find_audio_element(dom_id: &str) -> Option<AudioElement> {
    let document = window()?.document()?;
    document
        .get_element_by_id(dom_id)?
        .dyn_into::<HtmlAudioElement>()
        .ok()
}

/// Webview targets have no direct DOM access, so the element is driven by id.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, PartialEq)]
pub struct AudioElement {
    dom_id: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl AudioElement {
    fn run(&self, body: &str) {
        let script = format!(
            "(function() {{ const a = document.getElementById({:?}); if (a) {{ {body} }} }})();",
            self.dom_id
        );
        let _ = document::eval(&script);
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl AudioHandle for AudioElement {
    // Unknown from this side; `stop` checks `a.paused` in the page instead.
    fn is_paused(&self) -> bool {
        false
    }

    fn pause(&self) {
        self.run("a.pause();");
    }

    fn seek(&self, position: f64) {
        self.run(&format!("a.currentTime = {};", position.max(0.0)));
    }

    fn stop(&self) {
        self.run("if (!a.paused) { a.pause(); a.currentTime = 0; }");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn find_audio_element(dom_id: &str) -> Option<AudioElement> {
    Some(AudioElement {
        dom_id: dom_id.to_string(),
    })
}

/// Registry of mounted audio elements, one entry per rendered card.
///
/// Cards are keyed by their slot in the accumulated list, so two cards for
/// the same song id keep separate elements.
pub struct PlaybackCoordinator<H> {
    handles: HashMap<usize, (u64, H)>,
    playing: Option<(usize, u64)>,
}

impl<H> Default for PlaybackCoordinator<H> {
    fn default() -> Self {
        Self {
            handles: HashMap::new(),
            playing: None,
        }
    }
}

impl<H: AudioHandle> PlaybackCoordinator<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Song id of the card that is emitting audio, if any.
    pub fn currently_playing(&self) -> Option<u64> {
        self.playing.map(|(_, id)| id)
    }

    pub fn playing_slot(&self) -> Option<usize> {
        self.playing.map(|(slot, _)| slot)
    }

    #[cfg(test)]
    fn is_registered(&self, slot: usize) -> bool {
        self.handles.contains_key(&slot)
    }

    pub fn register(&mut self, slot: usize, id: u64, handle: H) {
        self.handles.insert(slot, (id, handle));
    }

    pub fn deregister(&mut self, slot: usize) {
        self.handles.remove(&slot);
        if self.playing_slot() == Some(slot) {
            self.playing = None;
        }
    }

    /// The card in `slot` started playing: stop and rewind every other audible card.
    pub fn on_play(&mut self, slot: usize, id: u64) {
        for (other, (_, handle)) in &self.handles {
            if *other != slot && !handle.is_paused() {
                handle.stop();
            }
        }
        self.playing = Some((slot, id));
    }

    /// The card in `slot` paused or ended without another card taking over.
    pub fn on_stopped(&mut self, slot: usize) {
        if self.playing_slot() == Some(slot) {
            self.playing = None;
        }
    }
}
