// Pass-through to the external product catalog
use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::ApiError;
use crate::handlers::utils::parse_id;
use crate::mockapi::Product;
use crate::state::AppState;

/// GET /mockapi/products
pub async fn products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.catalog.products().await?;
    Ok(Json(products))
}

/// GET /mockapi/products/:id
pub async fn product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_id(&id)?;
    let product = state.catalog.product(id).await?;
    Ok(Json(product))
}
