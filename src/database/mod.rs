pub mod manager;
pub mod memory;
pub mod models;
pub mod repository;

use async_trait::async_trait;
use thiserror::Error;

pub use manager::DatabaseManager;
pub use memory::MemoryAlbumStore;
pub use models::album::Album;
pub use repository::PgAlbumStore;

/// Errors from album storage
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Not found")]
    NotFound,

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Persistent album records.
///
/// Mutating operations report [`StorageError::NotFound`] when no row was
/// affected, so callers never see a silent no-op.
#[async_trait]
pub trait AlbumStore: Send + Sync {
    /// All albums, ordered by id.
    async fn list(&self) -> Result<Vec<Album>, StorageError>;

    async fn get_by_id(&self, id: i64) -> Result<Album, StorageError>;

    /// Insert a new album and return its assigned id. `album.id` is ignored.
    async fn create(&self, album: &Album) -> Result<i64, StorageError>;

    async fn delete(&self, id: i64) -> Result<(), StorageError>;

    /// Replace title, artist and price of an existing album.
    async fn update(&self, id: i64, album: &Album) -> Result<(), StorageError>;
}
