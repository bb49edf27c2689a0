//! Bearer-token gate for the admin namespace.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use super::AppState;
use crate::auth::{AuthError, Claims};
use crate::error::AppError;

/// Rejects the request with 403 unless it carries a valid admin token.
/// The verified [`Claims`] are stored in the request extensions.
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = authorize(&state, request.headers())?;
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

pub(crate) fn authorize(state: &AppState, headers: &HeaderMap) -> Result<Claims, AuthError> {
    let result =
        bearer_token(headers).and_then(|token| state.auth.tokens().authorize_admin(token));
    if let Err(e) = &result {
        warn!(reason = %e, "Admin request rejected");
    }
    result
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::Malformed)?;

    let (scheme, token) = value.split_once(' ').ok_or(AuthError::Malformed)?;
    if !scheme.eq_ignore_ascii_case("bearer") || token.trim().is_empty() {
        return Err(AuthError::Malformed);
    }
    Ok(token.trim())
}
