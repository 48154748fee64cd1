//! Shared client configuration consumed by the stores

use serde::{Deserialize, Serialize};

/// Path of the placeholder cover the server serves for albums without art.
pub const DEFAULT_UNKNOWN_COVER: &str = "/img/covers/unknown-album.png";

/// How many entries the most-played shelf shows by default.
pub const DEFAULT_MOST_PLAYED_COUNT: usize = 6;

/// Values the embedding client resolves once at startup and hands to the stores.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL of the shared placeholder cover. An album cover equal to this is
    /// treated as "no cover" when deriving an artist image.
    pub unknown_cover: String,
    /// Entry limit for the most-played shelf.
    pub most_played_count: usize,
}

impl Config {
    /// Config whose placeholder cover hangs off the client's base URL.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            unknown_cover: format!(
                "{}{}",
                base_url.trim_end_matches('/'),
                DEFAULT_UNKNOWN_COVER
            ),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unknown_cover: DEFAULT_UNKNOWN_COVER.to_string(),
            most_played_count: DEFAULT_MOST_PLAYED_COUNT,
        }
    }
}
