//! Read-only client for the external product catalog.
//!
//! The catalog is a mockapi.io project exposing `GET /products` and
//! `GET /products/{id}`. Products are passed through to our clients in the
//! catalog's own wire shape.

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::MockApiConfig;

mod string_number;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Product not found")]
    NotFound,

    #[error("Catalog responded with status {0}")]
    Status(StatusCode),

    #[error("Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Sent as a string by the catalog.
    #[serde(with = "string_number")]
    pub id: i64,
    pub product_name: String,
    pub product_description: String,
    pub department: String,
    /// Sent as a decimal string by the catalog.
    #[serde(with = "string_number")]
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(config: &MockApiConfig) -> Self {
        Self::with_base_url(config.base_url.clone())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        let url = format!("{}/products", self.base_url);
        debug!("GET {}", url);

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }
        Ok(resp.json().await?)
    }

    /// Fetch one product. A catalog 404 becomes [`CatalogError::NotFound`].
    pub async fn product(&self, id: i64) -> Result<Product, CatalogError> {
        let url = format!("{}/products/{}", self.base_url, id);
        debug!("GET {}", url);

        let resp = self.http.get(&url).send().await?;
        match resp.status() {
            StatusCode::NOT_FOUND => Err(CatalogError::NotFound),
            status if !status.is_success() => Err(CatalogError::Status(status)),
            _ => Ok(resp.json().await?),
        }
    }
}
