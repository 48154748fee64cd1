//! Model module - library state and data types
//!
//! Everything the client keeps in memory about the music library lives here.
//! It is organized into submodules by responsibility:
//!
//! - `types`: core record types (Artist, Album, Song, ArtistInfo)
//! - `payload`: deserialization of the raw library payload
//! - `artist_store`: the artist collection and its derived fields
//! - `album_store`: flat album index the artist store cascades into

mod types;
mod payload;
mod artist_store;
mod album_store;

// Re-export all public types for convenient access
pub use types::{Album, Artist, ArtistInfo, Song, UNKNOWN_ARTIST_ID};

pub use payload::{parse_artist, parse_artists};

pub use artist_store::ArtistStore;

pub use album_store::AlbumStore;
