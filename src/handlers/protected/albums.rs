use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use tracing::{error, info};

use crate::database::Album;
use crate::error::ApiError;
use crate::handlers::utils::{decode_body, parse_id};
use crate::middleware::AuthUser;
use crate::state::AppState;

/// POST /albums - 201 with `Location` set to the new album
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let album: Album = decode_body(&body)?;

    let id = state.albums.create(&album).await?;
    info!("User {} created album {}", user.username, id);

    let created = reload(&state, id).await;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/albums/{}", id))],
        Json(created),
    )
        .into_response())
}

/// PUT /albums/:id - replace title, artist and price
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Option<Album>>, ApiError> {
    let id = parse_id(&id)?;
    let album: Album = decode_body(&body)?;

    state.albums.update(id, &album).await?;
    info!("User {} updated album {}", user.username, id);

    Ok(Json(reload(&state, id).await))
}

/// DELETE /albums/:id
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;

    state.albums.delete(id).await?;
    info!("User {} deleted album {}", user.username, id);

    Ok(StatusCode::NO_CONTENT)
}

// The write already succeeded, so a failed re-read yields a null body
// rather than an error status.
async fn reload(state: &AppState, id: i64) -> Option<Album> {
    match state.albums.get_by_id(id).await {
        Ok(album) => Some(album),
        Err(e) => {
            error!("Failed to reload album {}: {}", id, e);
            None
        }
    }
}
