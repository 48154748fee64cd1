//! Artist collection store with derived-field maintenance

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::Config;

use super::album_store::AlbumStore;
use super::types::{Album, Artist, ArtistInfo, Song, UNKNOWN_ARTIST_ID};

/// In-memory store for the artist collection.
///
/// Cheap to clone; clones share the same state. Reads hand out snapshots so
/// view code never holds the lock, and every mutation goes through an
/// operation here so the derived fields (play count, song count, cached
/// cover) stay consistent with the album collections.
#[derive(Clone)]
pub struct ArtistStore {
    artists: Arc<RwLock<Vec<Artist>>>,
    config: Arc<Config>,
}

impl ArtistStore {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            artists: Arc::new(RwLock::new(Vec::new())),
            config,
        }
    }

    /// Replace the whole collection with the artists from a fresh library
    /// payload. Every record is set up (back-references, derived fields),
    /// then the album index is rebuilt from the same list.
    pub async fn init(&self, mut artists: Vec<Artist>, album_store: &AlbumStore) {
        for artist in artists.iter_mut() {
            setup_artist(artist, &self.config.unknown_cover);
        }

        *self.artists.write().await = artists.clone();
        tracing::debug!(count = artists.len(), "artist collection replaced");

        album_store.init(&artists).await;
    }

    /// Snapshot of all artists in collection order.
    pub async fn all(&self) -> Vec<Artist> {
        self.artists.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.artists.read().await.len()
    }

    /// Linear lookup by id. A missing id is an absent result, not an error.
    pub async fn by_id(&self, id: u32) -> Option<Artist> {
        self.artists.read().await.iter().find(|a| a.id == id).cloned()
    }

    /// Merge new artists into the collection. Union semantics: an id that is
    /// already present keeps its existing record and the incoming one is
    /// dropped. Genuinely new records are set up like at init.
    pub async fn add(&self, artists: Vec<Artist>) {
        let mut state = self.artists.write().await;
        let mut added = 0;
        for mut artist in artists {
            if state.iter().any(|existing| existing.id == artist.id) {
                continue;
            }
            setup_artist(&mut artist, &self.config.unknown_cover);
            state.push(artist);
            added += 1;
        }
        tracing::debug!(added, total = state.len(), "artists merged into collection");
    }

    /// Remove the given artists (matched by id) from the collection.
    pub async fn remove(&self, artists: &[Artist]) {
        let mut state = self.artists.write().await;
        state.retain(|existing| !artists.iter().any(|a| a.id == existing.id));
    }

    // ========================================================================
    // Album attach/detach
    // ========================================================================

    /// Attach albums to an artist. Union by album id (an existing album wins
    /// over an incoming duplicate); each attached album's back-reference is
    /// pointed at the artist, and the artist's play count becomes the sum
    /// over all current albums. Unknown artist ids are a no-op.
    pub async fn add_albums_to_artist(&self, artist_id: u32, albums: Vec<Album>) {
        let mut state = self.artists.write().await;
        if let Some(artist) = state.iter_mut().find(|a| a.id == artist_id) {
            for mut album in albums {
                if artist.albums.iter().any(|existing| existing.id == album.id) {
                    continue;
                }
                album.artist_id = artist.id;
                artist.albums.push(album);
            }
            artist.play_count = artist.albums.iter().map(|a| a.play_count).sum();
            tracing::debug!(artist_id, play_count = artist.play_count, "albums attached");
        }
    }

    /// Detach albums (matched by id) from an artist and recompute its play
    /// count from what remains. Unknown artist ids are a no-op.
    pub async fn remove_albums_from_artist(&self, artist_id: u32, albums: &[Album]) {
        let mut state = self.artists.write().await;
        if let Some(artist) = state.iter_mut().find(|a| a.id == artist_id) {
            artist
                .albums
                .retain(|existing| !albums.iter().any(|a| a.id == existing.id));
            artist.play_count = artist.albums.iter().map(|a| a.play_count).sum();
            tracing::debug!(artist_id, play_count = artist.play_count, "albums detached");
        }
    }

    /// True when the artist has no albums left. Missing ids count as empty.
    pub async fn is_artist_empty(&self, artist_id: u32) -> bool {
        self.artists
            .read()
            .await
            .iter()
            .find(|a| a.id == artist_id)
            .map(|a| a.albums.is_empty())
            .unwrap_or(true)
    }

    /// All songs performed by the artist, flattened in album order. The list
    /// is computed once and cached on the record; later calls return the
    /// cache as-is. Missing ids yield an empty list.
    pub async fn get_songs_by_artist(&self, artist_id: u32) -> Vec<Song> {
        let mut state = self.artists.write().await;
        if let Some(artist) = state.iter_mut().find(|a| a.id == artist_id) {
            if artist.songs.is_none() {
                let flattened: Vec<Song> = artist
                    .albums
                    .iter()
                    .flat_map(|album| album.songs.iter().cloned())
                    .collect();
                artist.songs = Some(flattened);
            }
            artist.songs.clone().unwrap_or_default()
        } else {
            Vec::new()
        }
    }

    /// The artist's cover URL. Cached on first computation: the first album
    /// cover that differs from the configured placeholder, else the
    /// placeholder itself. Missing ids resolve to the placeholder.
    pub async fn get_image(&self, artist_id: u32) -> String {
        let mut state = self.artists.write().await;
        if let Some(artist) = state.iter_mut().find(|a| a.id == artist_id) {
            if artist.image.is_none() {
                artist.image = Some(pick_cover(&artist.albums, &self.config.unknown_cover));
            }
            artist
                .image
                .clone()
                .unwrap_or_else(|| self.config.unknown_cover.clone())
        } else {
            self.config.unknown_cover.clone()
        }
    }

    /// Record the separately fetched info blob on an artist.
    pub async fn set_info(&self, artist_id: u32, info: ArtistInfo) {
        let mut state = self.artists.write().await;
        if let Some(artist) = state.iter_mut().find(|a| a.id == artist_id) {
            artist.info = Some(info);
        }
    }

    /// Top `n` artists by play count, descending. Entries that were never
    /// played and the unknown-artist bucket are left out; ties keep
    /// collection order.
    pub async fn get_most_played(&self, n: usize) -> Vec<Artist> {
        let state = self.artists.read().await;
        let mut applicable: Vec<Artist> = state
            .iter()
            .filter(|a| a.play_count > 0 && a.id != UNKNOWN_ARTIST_ID)
            .cloned()
            .collect();
        applicable.sort_by(|left, right| right.play_count.cmp(&left.play_count));
        applicable.truncate(n);
        applicable
    }
}

/// Derive the fields a fresh record needs before it enters the collection:
/// album back-references, the cached cover (kept if already present), a zero
/// play count, the song count, and a cleared info blob.
fn setup_artist(artist: &mut Artist, unknown_cover: &str) {
    for album in artist.albums.iter_mut() {
        album.artist_id = artist.id;
    }
    if artist.image.is_none() {
        artist.image = Some(pick_cover(&artist.albums, unknown_cover));
    }
    artist.play_count = 0;
    artist.song_count = artist.albums.iter().map(|a| a.songs.len() as u32).sum();
    artist.info = None;
}

/// First album cover that is not the placeholder, else the placeholder.
fn pick_cover(albums: &[Album], unknown_cover: &str) -> String {
    albums
        .iter()
        .map(|album| album.cover.as_str())
        .find(|cover| *cover != unknown_cover)
        .unwrap_or(unknown_cover)
        .to_string()
}
