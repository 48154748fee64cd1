//! Deserialization of the raw library payload into model types
//!
//! The data-fetch layer delivers the library as one JSON array of artists,
//! each carrying its albums and songs inline. Derived fields are left at
//! their serde defaults here; `ArtistStore::init` computes them.

use anyhow::Context;

use super::types::Artist;

/// Parse the full library payload.
pub fn parse_artists(json: &str) -> anyhow::Result<Vec<Artist>> {
    serde_json::from_str(json).context("failed to parse artist library payload")
}

/// Parse a single artist record, as pushed when one is added server-side.
pub fn parse_artist(json: &str) -> anyhow::Result<Artist> {
    serde_json::from_str(json).context("failed to parse artist payload")
}
