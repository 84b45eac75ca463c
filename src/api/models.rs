use serde::{Deserialize, Serialize};

pub const DEFAULT_SONGS_URL: &str = "https://robo-music-api.onrender.com/music/my-api";

/// Where the song listing endpoint lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SONGS_URL)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: u64,
    #[serde(rename = "songTitle")]
    pub title: String,
    #[serde(rename = "artistName")]
    pub artist: String,
    #[serde(default, rename = "albumName")]
    pub album: String,
    #[serde(default, rename = "releaseDate")]
    pub release_date: String,
    #[serde(default, rename = "songImage")]
    pub image_url: String,
    #[serde(rename = "songUrl")]
    pub audio_url: String,
}
