//! The components module contains all shared components for our app.

mod app;
mod audio_manager;
mod icons;
mod search_bar;
mod song_browser;
mod song_card;

pub use app::*;
pub use audio_manager::*;
pub use icons::*;
pub use search_bar::*;
pub use song_browser::*;
pub use song_card::*;
