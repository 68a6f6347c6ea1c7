use axum::{
    extract::{Request, State},
    http,
    middleware::Next,
    response::Response,
};

use crate::{ApiError, ApiState};

/// Requires a `Bearer` session token minted by sign-in. The resolved
/// session is stored as a request extension for downstream handlers.
pub async fn auth(
    State(state): State<ApiState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok());

    let auth_header = if let Some(auth_header) = auth_header {
        auth_header
    } else {
        return Err(ApiError::AuthError(
            "Authorization header is missing".to_string(),
        ));
    };

    let Some(token) = auth_header.strip_prefix("Bearer ") else {
        return Err(ApiError::AuthError(
            "Authorization header is not a bearer token".to_string(),
        ));
    };

    let session = state
        .backend
        .session(token)
        .await
        .map_err(|e| ApiError::ServerError(e.to_string()))?;

    let Some(session) = session else {
        return Err(ApiError::AuthError(
            "Invalid session token".to_string(),
        ));
    };

    req.extensions_mut().insert(session);
    Ok(next.run(req).await)
}
