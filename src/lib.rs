//! lark-store - client-side state layer for the Lark music-streaming client
//!
//! Holds the in-memory artist collection with its derived fields (play
//! counts, song counts, cached covers), the flat album index it cascades
//! into, and the payload parsing that feeds both. The embedding client owns
//! fetching, rendering, and playback; this crate owns what the views read.

pub mod config;
pub mod logging;
pub mod model;

pub use config::Config;
pub use model::{Album, Artist, ArtistInfo, Song};
pub use model::{AlbumStore, ArtistStore};
