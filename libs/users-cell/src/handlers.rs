// libs/users-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use shared_models::error::{AppError, FieldError};

use crate::models::{CreateUserRequest, User, UserError};
use crate::services::password::hash_password;
use crate::services::store::UserStore;
use crate::services::validation::validate_new_user;

pub async fn create_user(
    State(store): State<Arc<UserStore>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let Json(request) = payload.map_err(|rejection| {
        AppError::validation(
            "Invalid user data",
            vec![FieldError::new("body", rejection.body_text())],
        )
    })?;
    let new_user = validate_new_user(request).map_err(UserError::Validation)?;

    // Skip the hashing cost for an email that is already registered
    if store.find_by_email(&new_user.email).await.is_some() {
        return Err(UserError::EmailTaken.into());
    }

    let password_hash = hash_password(&new_user.password).map_err(UserError::from)?;
    let user = store.create(new_user, password_hash).await?;

    info!("User {} registered as {}", user.id, user.role);
    Ok((StatusCode::CREATED, Json(user)))
}
