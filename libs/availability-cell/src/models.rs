// libs/availability-cell/src/models.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::error::{AppError, FieldError};

// ==============================================================================
// AVAILABILITY RULES
// ==============================================================================

/// Business hours for one weekday. `day_of_week` counts from 0 = Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRule {
    pub id: i64,
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
    pub is_available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAvailabilityRule {
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
    pub is_available: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityRuleChanges {
    pub day_of_week: Option<u8>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub is_available: Option<bool>,
}

pub const SUNDAY: u8 = 0;
pub const SATURDAY: u8 = 6;

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRuleRequest {
    pub day_of_week: Option<i64>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub is_available: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableDatesResponse {
    pub available_dates: Vec<NaiveDate>,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Error, Debug)]
pub enum AvailabilityError {
    #[error("Availability not found")]
    NotFound,

    #[error("Invalid availability data")]
    Validation(Vec<FieldError>),

    #[error("Day of week must be between 0 (Sunday) and 6 (Saturday)")]
    InvalidDay,

    #[error("{0}")]
    InvalidRange(String),
}

impl From<AvailabilityError> for AppError {
    fn from(err: AvailabilityError) -> Self {
        match err {
            AvailabilityError::NotFound => AppError::NotFound(err.to_string()),
            AvailabilityError::Validation(errors) => {
                AppError::validation("Invalid availability data", errors)
            }
            AvailabilityError::InvalidDay => AppError::BadRequest(err.to_string()),
            AvailabilityError::InvalidRange(msg) => AppError::BadRequest(msg),
        }
    }
}
