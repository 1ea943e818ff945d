use axum::{
    extract::{Path, State},
    Json,
};

use crate::database::Album;
use crate::error::ApiError;
use crate::handlers::utils::parse_id;
use crate::state::AppState;

/// GET /albums
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Album>>, ApiError> {
    let albums = state.albums.list().await?;
    Ok(Json(albums))
}

/// GET /albums/:id
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Album>, ApiError> {
    let id = parse_id(&id)?;
    let album = state.albums.get_by_id(id).await?;
    Ok(Json(album))
}
