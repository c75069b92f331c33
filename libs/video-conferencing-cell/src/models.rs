// libs/video-conferencing-cell/src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::error::{AppError, FieldError};

// ==============================================================================
// MEETING MODELS
// ==============================================================================

/// What the provisioner needs to open a meeting for an appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingRequest {
    pub topic: String,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i32,
}

/// Meeting coordinates copied onto the appointment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingDetails {
    pub id: String,
    pub join_url: String,
    pub password: String,
}

// ==============================================================================
// ZOOM SETTINGS
// ==============================================================================

pub const ZOOM_SETTINGS_ID: i64 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomSettings {
    pub id: i64,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub zoom_email: Option<String>,
}

impl ZoomSettings {
    pub fn has_credentials(&self) -> bool {
        let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        filled(&self.api_key) && filled(&self.api_secret)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomSettingsUpdate {
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub zoom_email: Option<String>,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Error, Debug)]
pub enum VideoConferencingError {
    #[error("Meeting provisioning failed: {message}")]
    ProvisioningFailed { message: String },

    #[error("Invalid Zoom settings")]
    InvalidSettings(Vec<FieldError>),
}

impl From<VideoConferencingError> for AppError {
    fn from(err: VideoConferencingError) -> Self {
        match err {
            VideoConferencingError::InvalidSettings(errors) => {
                AppError::validation("Invalid Zoom settings data", errors)
            }
            VideoConferencingError::ProvisioningFailed { .. } => {
                AppError::ExternalService(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_error_mapping() {
        let failed = AppError::from(VideoConferencingError::ProvisioningFailed {
            message: "zoom unreachable".into(),
        });
        assert_eq!(failed.status_code(), axum::http::StatusCode::BAD_GATEWAY);
        assert_matches!(failed, AppError::ExternalService(msg) if msg.contains("zoom unreachable"));

        let invalid = AppError::from(VideoConferencingError::InvalidSettings(vec![
            FieldError::new("apiKey", "Expected string"),
        ]));
        assert_matches!(
            invalid,
            AppError::Validation { message, errors }
                if message == "Invalid Zoom settings data" && errors.len() == 1
        );
    }
}
