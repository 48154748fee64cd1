//! Core record types shared by the stores

use serde::{Deserialize, Serialize};

/// Artist id the server assigns to songs with no usable tag metadata.
/// Ranking queries skip it so the "Unknown Artist" bucket never charts.
pub const UNKNOWN_ARTIST_ID: u32 = 1;

/// A single song as delivered inside an album payload
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub album_id: u32,
    #[serde(default)]
    pub duration_ms: u32,
}

/// An album owned by exactly one artist
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    /// Back-reference to the owning artist, normalized whenever the album
    /// is attached to one.
    #[serde(default)]
    pub artist_id: u32,
    /// Cover URL; may be the shared placeholder. The wire format has used
    /// both `cover` and `image` for this key.
    #[serde(alias = "image")]
    pub cover: String,
    #[serde(default)]
    pub play_count: u32,
    pub songs: Vec<Song>,
}

/// An artist record plus the fields the store derives for the views
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: u32,
    pub name: String,
    pub albums: Vec<Album>,
    /// Sum of the current albums' play counts. Zero right after setup;
    /// recomputed by every album attach/detach.
    #[serde(default)]
    pub play_count: u32,
    /// Number of songs across all albums, computed at setup.
    #[serde(default)]
    pub song_count: u32,
    /// Cached cover URL. Computed at most once: the first album cover that
    /// differs from the configured placeholder, else the placeholder.
    #[serde(default)]
    pub image: Option<String>,
    /// Lazily cached flattened song list; never part of the wire shape.
    #[serde(skip)]
    pub songs: Option<Vec<Song>>,
    /// Enrichment blob the client fetches separately, absent until then.
    #[serde(default)]
    pub info: Option<ArtistInfo>,
}

/// Extra artist material (biography, portrait) fetched outside the library payload
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtistInfo {
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}
