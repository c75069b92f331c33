use std::sync::Arc;

use axum::extract::{rejection::JsonRejection, State};
use axum::Json;
use axum_extra::{typed_header::TypedHeaderRejection, TypedHeader};
use headers::{authorization::Bearer, Authorization};
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use shared_config::AppConfig;
use shared_models::auth::{AdminLoginRequest, AdminTokenResponse};
use shared_models::error::{AppError, FieldError};
use shared_utils::jwt::{issue_admin_token, validate_token};

/// Compare without short-circuiting on the first differing byte.
fn passwords_match(given: &str, expected: &str) -> bool {
    let (given, expected) = (given.as_bytes(), expected.as_bytes());
    given.len() == expected.len()
        && given
            .iter()
            .zip(expected)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}

pub async fn admin_login(
    State(config): State<Arc<AppConfig>>,
    payload: Result<Json<AdminLoginRequest>, JsonRejection>,
) -> Result<Json<AdminTokenResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        AppError::validation(
            "Invalid login data",
            vec![FieldError::new("body", rejection.body_text())],
        )
    })?;

    if !config.is_admin_auth_enabled() {
        return Err(AppError::Auth("Admin login is not configured".to_string()));
    }

    if !passwords_match(&request.password, &config.admin_password) {
        warn!("Rejected admin login attempt");
        return Err(AppError::Auth("Invalid password".to_string()));
    }

    let (token, expires_at) =
        issue_admin_token(&config.admin_token_secret, config.admin_session_hours)
            .map_err(AppError::Internal)?;

    info!("Admin session issued, expires at {}", expires_at);
    Ok(Json(AdminTokenResponse { token, expires_at }))
}

/// Lets the dashboard check a stored token before showing admin views.
pub async fn admin_session(
    State(config): State<Arc<AppConfig>>,
    auth: Result<TypedHeader<Authorization<Bearer>>, TypedHeaderRejection>,
) -> Result<Json<Value>, AppError> {
    if !config.is_admin_auth_enabled() {
        return Ok(Json(json!({ "valid": true, "expiresAt": null })));
    }

    let TypedHeader(auth) =
        auth.map_err(|_| AppError::Auth("Missing authorization header".to_string()))?;

    let session = validate_token(auth.token(), &config.admin_token_secret).map_err(AppError::Auth)?;
    if !session.is_admin() {
        return Err(AppError::Auth("Admin access required".to_string()));
    }

    debug!("Admin session {} verified", session.id);
    Ok(Json(json!({ "valid": true, "expiresAt": session.expires_at })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passwords_match() {
        assert!(passwords_match("s3cret", "s3cret"));
        assert!(!passwords_match("s3cret", "s3creT"));
        assert!(!passwords_match("s3cret", "s3cret!"));
        assert!(!passwords_match("", "s3cret"));
    }
}
