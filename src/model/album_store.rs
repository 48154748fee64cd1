//! Flat album index rebuilt from the artist collection

use std::sync::Arc;
use tokio::sync::RwLock;

use super::types::{Album, Artist};

/// Flat index of every album in the library, keyed by id.
///
/// The artist store cascades into this on every `init`, so the index holds
/// clones taken at cascade time; it is refreshed by the next cascade rather
/// than tracking album mutations on individual artists.
#[derive(Clone, Default)]
pub struct AlbumStore {
    albums: Arc<RwLock<Vec<Album>>>,
}

impl AlbumStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the index from every album across the given artists, with
    /// each album's back-reference pointed at its owner.
    pub async fn init(&self, artists: &[Artist]) {
        let mut albums: Vec<Album> = Vec::new();
        for artist in artists {
            for album in &artist.albums {
                let mut album = album.clone();
                album.artist_id = artist.id;
                albums.push(album);
            }
        }
        tracing::debug!(count = albums.len(), "album index rebuilt");
        *self.albums.write().await = albums;
    }

    /// Snapshot of the index in cascade order.
    pub async fn all(&self) -> Vec<Album> {
        self.albums.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.albums.read().await.len()
    }

    /// Linear lookup by id. A missing id is an absent result, not an error.
    pub async fn by_id(&self, id: u32) -> Option<Album> {
        self.albums.read().await.iter().find(|a| a.id == id).cloned()
    }

    /// Merge albums into the index. Union semantics: an id already present
    /// keeps its existing record and the incoming one is dropped.
    pub async fn add(&self, albums: Vec<Album>) {
        let mut state = self.albums.write().await;
        for album in albums {
            if state.iter().any(|existing| existing.id == album.id) {
                continue;
            }
            state.push(album);
        }
    }

    /// Remove the given albums (matched by id) from the index.
    pub async fn remove(&self, albums: &[Album]) {
        let mut state = self.albums.write().await;
        state.retain(|existing| !albums.iter().any(|a| a.id == existing.id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_album(id: u32, cover: &str) -> Album {
        Album {
            id,
            name: format!("Album {}", id),
            cover: cover.to_string(),
            ..Default::default()
        }
    }

    fn create_test_artist(id: u32, albums: Vec<Album>) -> Artist {
        Artist {
            id,
            name: format!("Artist {}", id),
            albums,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_init_indexes_all_albums_with_back_references() {
        let store = AlbumStore::new();
        let artists = vec![
            create_test_artist(2, vec![create_test_album(20, "/a.jpg")]),
            create_test_artist(
                3,
                vec![create_test_album(30, "/b.jpg"), create_test_album(31, "/c.jpg")],
            ),
        ];

        store.init(&artists).await;

        assert_eq!(store.count().await, 3);
        assert_eq!(store.by_id(20).await.unwrap().artist_id, 2);
        assert_eq!(store.by_id(31).await.unwrap().artist_id, 3);
    }

    #[tokio::test]
    async fn test_init_replaces_previous_index() {
        let store = AlbumStore::new();
        store
            .init(&[create_test_artist(2, vec![create_test_album(20, "/a.jpg")])])
            .await;
        store
            .init(&[create_test_artist(3, vec![create_test_album(30, "/b.jpg")])])
            .await;

        assert_eq!(store.count().await, 1);
        assert!(store.by_id(20).await.is_none());
        assert!(store.by_id(30).await.is_some());
    }

    #[tokio::test]
    async fn test_by_id_missing_is_none() {
        let store = AlbumStore::new();
        store.init(&[]).await;

        assert!(store.by_id(99).await.is_none());
    }

    #[tokio::test]
    async fn test_add_is_union_by_id() {
        let store = AlbumStore::new();
        store.add(vec![create_test_album(40, "/original.jpg")]).await;

        store.add(vec![
            create_test_album(40, "/impostor.jpg"),
            create_test_album(41, "/new.jpg"),
        ])
        .await;

        assert_eq!(store.count().await, 2);
        assert_eq!(store.by_id(40).await.unwrap().cover, "/original.jpg");
    }

    #[tokio::test]
    async fn test_remove_is_difference_by_id() {
        let store = AlbumStore::new();
        store
            .add(vec![create_test_album(40, "/a.jpg"), create_test_album(41, "/b.jpg")])
            .await;

        store.remove(&[create_test_album(40, "/whatever.jpg")]).await;

        assert_eq!(store.count().await, 1);
        assert!(store.by_id(40).await.is_none());
        assert!(store.by_id(41).await.is_some());
    }
}
