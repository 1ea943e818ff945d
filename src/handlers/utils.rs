use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Parse an `{id}` path segment. Failure is a 400 with no body.
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::bad_id())
}

/// Decode a JSON request body. Failure is a 400 carrying the decoder message.
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::bad_request(e.to_string()))
}
