// libs/users-cell/src/services/validation.rs
use shared_models::error::FieldError;
use shared_utils::validation::is_valid_email;

use crate::models::{CreateUserRequest, NewUser, DEFAULT_ROLE};

pub fn validate_new_user(request: CreateUserRequest) -> Result<NewUser, Vec<FieldError>> {
    let mut errors = Vec::new();

    let username = required_text("username", request.username, &mut errors);

    // Passwords are taken as typed, surrounding whitespace included.
    let password = match request.password {
        Some(password) if !password.is_empty() => Some(password),
        Some(_) => {
            errors.push(FieldError::new("password", "Password cannot be empty"));
            None
        }
        None => {
            errors.push(FieldError::new("password", "Required"));
            None
        }
    };

    let email = required_text("email", request.email, &mut errors).and_then(|email| {
        if is_valid_email(&email) {
            Some(email)
        } else {
            errors.push(FieldError::new("email", "Invalid email"));
            None
        }
    });

    let role = match request.role.as_deref().map(str::trim) {
        None => Some(DEFAULT_ROLE.to_string()),
        Some("") => {
            errors.push(FieldError::new("role", "Role cannot be empty"));
            None
        }
        Some(role) => Some(role.to_string()),
    };

    match (username, password, email, role) {
        (Some(username), Some(password), Some(email), Some(role)) if errors.is_empty() => {
            Ok(NewUser {
                username,
                email,
                first_name: optional_text(request.first_name),
                last_name: optional_text(request.last_name),
                role,
                password,
            })
        }
        _ => Err(errors),
    }
}

fn required_text(
    field: &str,
    value: Option<String>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value.as_deref().map(str::trim) {
        Some("") => {
            errors.push(FieldError::new(field, format!("{} cannot be empty", capitalize(field))));
            None
        }
        Some(text) => Some(text.to_string()),
        None => {
            errors.push(FieldError::new(field, "Required"));
            None
        }
    }
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
