use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::models::album::{Album, AlbumRow};
use super::{AlbumStore, StorageError};

// NUMERIC price is read back as float8 so it decodes into f64.
const SELECT_ALBUMS: &str = "SELECT id, title, artist, price::float8 AS price FROM album";

/// PostgreSQL-backed album storage.
#[derive(Clone)]
pub struct PgAlbumStore {
    pool: PgPool,
}

impl PgAlbumStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlbumStore for PgAlbumStore {
    async fn list(&self) -> Result<Vec<Album>, StorageError> {
        let rows = sqlx::query_as::<_, AlbumRow>(&format!("{SELECT_ALBUMS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        debug!("Listed {} albums", rows.len());
        Ok(rows.into_iter().map(Album::from).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Album, StorageError> {
        let row = sqlx::query_as::<_, AlbumRow>(&format!("{SELECT_ALBUMS} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Album::from).ok_or(StorageError::NotFound)
    }

    async fn create(&self, album: &Album) -> Result<i64, StorageError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO album (title, artist, price) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&album.title)
        .bind(&album.artist)
        .bind(album.price)
        .fetch_one(&self.pool)
        .await?;

        debug!("Created album {}", id);
        Ok(id)
    }

    async fn delete(&self, id: i64) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM album WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        debug!("Deleted album {}", id);
        Ok(())
    }

    async fn update(&self, id: i64, album: &Album) -> Result<(), StorageError> {
        let result =
            sqlx::query("UPDATE album SET title = $1, artist = $2, price = $3 WHERE id = $4")
                .bind(&album.title)
                .bind(&album.artist)
                .bind(album.price)
                .bind(id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        debug!("Updated album {}", id);
        Ok(())
    }
}
