use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::constants::API_KEY_HEADER;
use crate::error::AppError;
use crate::AppState;

/// Rejects requests whose `x-api-key` header is missing (401) or does not
/// equal the configured secret (403). Matching requests pass through as is.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let provided = request.headers().get(API_KEY_HEADER).ok_or_else(|| {
        AppError::Unauthorized(format!("{} header is required", API_KEY_HEADER))
    })?;

    if provided.as_bytes() != state.api_key.as_bytes() {
        return Err(AppError::Forbidden("The provided API key is invalid".to_string()));
    }

    Ok(next.run(request).await)
}
