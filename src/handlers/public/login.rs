use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::handlers::utils::decode_body;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /login - exchange admin credentials for a bearer token
pub async fn login_post(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LoginResponse>, ApiError> {
    let credentials: LoginRequest = decode_body(&body)?;

    if !state
        .auth
        .authenticate(&credentials.username, &credentials.password)
    {
        warn!("Failed login for user {:?}", credentials.username);
        return Err(ApiError::Unauthorized);
    }

    let token = state.auth.issue_token(&credentials.username)?;
    info!("Issued token for user {:?}", credentials.username);
    Ok(Json(LoginResponse { token }))
}
