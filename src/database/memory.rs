use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::models::album::Album;
use super::{AlbumStore, StorageError};

/// In-process album storage with the same contract as [`super::PgAlbumStore`].
///
/// Ids are assigned from a counter starting at 1 and are never reused.
#[derive(Default)]
pub struct MemoryAlbumStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    albums: BTreeMap<i64, Album>,
}

impl MemoryAlbumStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AlbumStore for MemoryAlbumStore {
    async fn list(&self) -> Result<Vec<Album>, StorageError> {
        let inner = self.inner.read().await;
        Ok(inner.albums.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Album, StorageError> {
        let inner = self.inner.read().await;
        inner.albums.get(&id).cloned().ok_or(StorageError::NotFound)
    }

    async fn create(&self, album: &Album) -> Result<i64, StorageError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let id = inner.next_id;
        inner.albums.insert(
            id,
            Album {
                id,
                ..album.clone()
            },
        );
        Ok(id)
    }

    async fn delete(&self, id: i64) -> Result<(), StorageError> {
        let mut inner = self.inner.write().await;
        inner
            .albums
            .remove(&id)
            .map(|_| ())
            .ok_or(StorageError::NotFound)
    }

    async fn update(&self, id: i64, album: &Album) -> Result<(), StorageError> {
        let mut inner = self.inner.write().await;
        let existing = inner.albums.get_mut(&id).ok_or(StorageError::NotFound)?;
        existing.title = album.title.clone();
        existing.artist = album.artist.clone();
        existing.price = album.price;
        Ok(())
    }
}
