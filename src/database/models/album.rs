use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An album as seen by API clients.
///
/// Fields missing from a request body decode to their zero values; the id
/// of an inbound album is never trusted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub price: f64,
}

/// Row shape of the `album` table. `price` is nullable in storage.
#[derive(Debug, Clone, FromRow)]
pub struct AlbumRow {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub price: Option<f64>,
}

impl From<AlbumRow> for Album {
    fn from(row: AlbumRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            artist: row.artist,
            price: row.price.unwrap_or_default(),
        }
    }
}
