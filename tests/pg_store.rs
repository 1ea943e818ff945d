//! PostgreSQL-backed storage tests.
//!
//! Run with a scratch database:
//! `TEST_DATABASE_URL=postgres://... cargo test --test pg_store -- --ignored`

use album_api::database::{Album, AlbumStore, PgAlbumStore, StorageError};
use anyhow::{Context, Result};
use sqlx::PgPool;

async fn store() -> Result<PgAlbumStore> {
    let url = std::env::var("TEST_DATABASE_URL").context("TEST_DATABASE_URL must be set")?;
    let pool = PgPool::connect(&url).await?;
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS album (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            artist TEXT NOT NULL,
            price NUMERIC(6, 2)
        )",
    )
    .execute(&pool)
    .await?;
    Ok(PgAlbumStore::new(pool))
}

fn album(title: &str, price: f64) -> Album {
    Album {
        id: 0,
        title: title.to_string(),
        artist: "Test Artist".to_string(),
        price,
    }
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn create_then_get_round_trips() -> Result<()> {
    let store = store().await?;
    let input = album("Round Trip", 12.5);

    let id = store.create(&input).await?;
    let stored = store.get_by_id(id).await?;

    assert_eq!(stored, Album { id, ..input });
    store.delete(id).await?;
    Ok(())
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn delete_twice_reports_not_found() -> Result<()> {
    let store = store().await?;
    let id = store.create(&album("Short Lived", 1.0)).await?;

    store.delete(id).await?;
    assert!(matches!(store.delete(id).await, Err(StorageError::NotFound)));
    assert!(matches!(store.get_by_id(id).await, Err(StorageError::NotFound)));
    Ok(())
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn update_missing_row_reports_not_found() -> Result<()> {
    let store = store().await?;
    let id = store.create(&album("Present", 3.0)).await?;
    store.delete(id).await?;

    let result = store.update(id, &album("Ghost", 4.0)).await;
    assert!(matches!(result, Err(StorageError::NotFound)));
    Ok(())
}

#[tokio::test]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn null_price_reads_as_zero() -> Result<()> {
    let store = store().await?;
    let url = std::env::var("TEST_DATABASE_URL")?;
    let pool = PgPool::connect(&url).await?;
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO album (title, artist, price) VALUES ('No Price', 'Nobody', NULL) RETURNING id",
    )
    .fetch_one(&pool)
    .await?;

    assert_eq!(store.get_by_id(id).await?.price, 0.0);
    store.delete(id).await?;
    Ok(())
}
