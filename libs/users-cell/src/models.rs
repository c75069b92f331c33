// libs/users-cell/src/models.rs
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::error::{AppError, FieldError};

pub const DEFAULT_ROLE: &str = "patient";

// ==============================================================================
// USER MODELS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// A validated registration. `password` is still plaintext here.
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: String,
    pub password: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("role", &self.role)
            .field("password", &"<redacted>")
            .finish()
    }
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Error, Debug)]
pub enum UserError {
    #[error("User with this email already exists")]
    EmailTaken,

    #[error("User with this username already exists")]
    UsernameTaken,

    #[error("Invalid user data")]
    Validation(Vec<FieldError>),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

impl From<argon2::password_hash::Error> for UserError {
    fn from(err: argon2::password_hash::Error) -> Self {
        UserError::PasswordHash(err.to_string())
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::EmailTaken | UserError::UsernameTaken => {
                AppError::BadRequest(err.to_string())
            }
            UserError::Validation(errors) => AppError::validation("Invalid user data", errors),
            UserError::PasswordHash(detail) => AppError::Internal(detail),
        }
    }
}
