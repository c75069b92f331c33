use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::jwt::validate_token;

pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let auth_header = headers
        .get("Authorization")
        .ok_or_else(|| AppError::Auth("Missing authorization header".to_string()))?;

    let auth_value = auth_header
        .to_str()
        .map_err(|_| AppError::Auth("Invalid authorization header format".to_string()))?;

    auth_value
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Auth("Invalid authorization header format".to_string()))
}

/// Admin gate for dashboard routes. A no-op until an admin password is configured.
pub async fn require_admin(
    State(config): State<Arc<AppConfig>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    if !config.is_admin_auth_enabled() {
        return Ok(next.run(request).await);
    }

    let token = extract_bearer_token(request.headers())?;

    let session = validate_token(token, &config.admin_token_secret).map_err(AppError::Auth)?;

    if !session.is_admin() {
        return Err(AppError::Auth("Admin access required".to_string()));
    }

    debug!("Admin session {} authorized for {}", session.id, request.uri().path());
    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}
