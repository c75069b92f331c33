// libs/appointment-cell/src/models.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use shared_models::error::{AppError, FieldError};

pub const DEFAULT_APPOINTMENT_TYPE: &str = "Initial Consultation";

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub user_id: Option<i64>,
    pub patient_name: String,
    pub patient_email: String,
    pub date: DateTime<Utc>,
    pub duration: i32,
    #[serde(rename = "type")]
    pub appointment_type: String,
    pub status: AppointmentStatus,
    pub zoom_meeting_id: Option<String>,
    pub zoom_meeting_url: Option<String>,
    pub zoom_meeting_password: Option<String>,
    pub questionnaire: Option<Questionnaire>,
}

impl Appointment {
    pub fn scheduled_end_time(&self) -> DateTime<Utc> {
        self.date + chrono::Duration::minutes(self.duration as i64)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A validated booking, ready for the store to assign an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAppointment {
    pub user_id: Option<i64>,
    pub patient_name: String,
    pub patient_email: String,
    pub date: DateTime<Utc>,
    pub duration: i32,
    pub appointment_type: String,
    pub status: AppointmentStatus,
    pub zoom_meeting_id: Option<String>,
    pub zoom_meeting_url: Option<String>,
    pub zoom_meeting_password: Option<String>,
    pub questionnaire: Option<Questionnaire>,
}

/// Validated partial update; `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentChanges {
    pub user_id: Option<i64>,
    pub patient_name: Option<String>,
    pub patient_email: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub duration: Option<i32>,
    pub appointment_type: Option<String>,
    pub status: Option<AppointmentStatus>,
    pub zoom_meeting_id: Option<String>,
    pub zoom_meeting_url: Option<String>,
    pub zoom_meeting_password: Option<String>,
    pub questionnaire: Option<Questionnaire>,
}

// ==============================================================================
// INTAKE QUESTIONNAIRE
// ==============================================================================

/// Twenty 1-10 self-ratings collected before the first consultation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Questionnaire {
    pub overall_mood: i32,
    pub anxiety_frequency: i32,
    pub sleep_ability: i32,
    pub stress_frequency: i32,
    pub difficulty_handling: i32,
    pub overwhelmed_frequency: i32,
    pub sadness_frequency: i32,
    pub connection_to_others: i32,
    pub negative_thoughts: i32,
    pub hopefulness: i32,
    pub life_satisfaction: i32,
    pub motivation: i32,
    pub loneliness_frequency: i32,
    pub physical_drain_frequency: i32,
    pub focus_difficulty: i32,
    pub irritability_frequency: i32,
    pub hobby_enjoyment: i32,
    pub support_from_loved_ones: i32,
    pub accomplishment_frequency: i32,
    pub self_esteem: i32,
}

/// Wire names of every questionnaire rating, in form order.
pub const QUESTIONNAIRE_FIELDS: [&str; 20] = [
    "overallMood",
    "anxietyFrequency",
    "sleepAbility",
    "stressFrequency",
    "difficultyHandling",
    "overwhelmedFrequency",
    "sadnessFrequency",
    "connectionToOthers",
    "negativeThoughts",
    "hopefulness",
    "lifeSatisfaction",
    "motivation",
    "lonelinessFrequency",
    "physicalDrainFrequency",
    "focusDifficulty",
    "irritabilityFrequency",
    "hobbyEnjoyment",
    "supportFromLovedOnes",
    "accomplishmentFrequency",
    "selfEsteem",
];

pub const QUESTIONNAIRE_MIN_RATING: i64 = 1;
pub const QUESTIONNAIRE_MAX_RATING: i64 = 10;

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

/// Raw booking payload. Fields stay loose so validation can report every
/// problem at once instead of failing on the first bad field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub user_id: Option<i64>,
    pub patient_name: Option<String>,
    pub patient_email: Option<String>,
    pub date: Option<String>,
    pub duration: Option<i32>,
    #[serde(rename = "type")]
    pub appointment_type: Option<String>,
    pub status: Option<AppointmentStatus>,
    pub questionnaire: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentRequest {
    pub user_id: Option<i64>,
    pub patient_name: Option<String>,
    pub patient_email: Option<String>,
    pub date: Option<String>,
    pub duration: Option<i32>,
    #[serde(rename = "type")]
    pub appointment_type: Option<String>,
    pub status: Option<AppointmentStatus>,
    pub zoom_meeting_id: Option<String>,
    pub zoom_meeting_url: Option<String>,
    pub zoom_meeting_password: Option<String>,
    pub questionnaire: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentListQuery {
    pub date: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub user_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct AvailableTimesQuery {
    pub date: Option<String>,
    pub interval: Option<u32>,
}

/// One bookable time-of-day label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(rename = "time")]
    pub label: String,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableTimesResponse {
    pub date: NaiveDate,
    pub unavailable_times: Vec<String>,
    pub slots: Vec<TimeSlot>,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Error, Debug)]
pub enum AppointmentError {
    #[error("Appointment not found")]
    NotFound,

    #[error("Invalid appointment data")]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    InvalidQuery(String),

    #[error("Invalid slot window: {0}")]
    InvalidSlotWindow(String),
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::NotFound => AppError::NotFound(err.to_string()),
            AppointmentError::Validation(errors) => {
                AppError::validation("Invalid appointment data", errors)
            }
            AppointmentError::InvalidQuery(msg) => AppError::BadRequest(msg),
            AppointmentError::InvalidSlotWindow(_) => AppError::BadRequest(err.to_string()),
        }
    }
}
