// libs/appointment-cell/src/services/validation.rs
use chrono::{DateTime, Utc};
use serde_json::Value;

use shared_models::error::FieldError;
use shared_utils::validation::{is_valid_email, parse_datetime};

use crate::models::{
    AppointmentChanges, AppointmentStatus, CreateAppointmentRequest, NewAppointment,
    Questionnaire, UpdateAppointmentRequest, DEFAULT_APPOINTMENT_TYPE, QUESTIONNAIRE_FIELDS,
    QUESTIONNAIRE_MAX_RATING, QUESTIONNAIRE_MIN_RATING,
};

pub const MAX_DURATION_MINUTES: i32 = 480;
pub const MAX_NAME_LENGTH: usize = 200;
pub const UNPARSEABLE_DATE: &str = "Could not parse appointment date";

/// Check a questionnaire payload field by field. `prefix` namespaces the
/// reported field names when the questionnaire is nested in a booking.
pub fn validate_questionnaire(value: &Value, prefix: &str) -> Result<Questionnaire, Vec<FieldError>> {
    let field_name = |name: &str| {
        if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", prefix, name)
        }
    };

    let Some(object) = value.as_object() else {
        let field = if prefix.is_empty() { "body" } else { prefix };
        return Err(vec![FieldError::new(field, "Expected object")]);
    };

    let mut errors = Vec::new();

    for name in QUESTIONNAIRE_FIELDS {
        match object.get(name) {
            None | Some(Value::Null) => errors.push(FieldError::new(field_name(name), "Required")),
            Some(rating) => match rating.as_i64() {
                None => errors.push(FieldError::new(field_name(name), "Expected integer")),
                Some(r) if r < QUESTIONNAIRE_MIN_RATING => errors.push(FieldError::new(
                    field_name(name),
                    format!("Number must be greater than or equal to {}", QUESTIONNAIRE_MIN_RATING),
                )),
                Some(r) if r > QUESTIONNAIRE_MAX_RATING => errors.push(FieldError::new(
                    field_name(name),
                    format!("Number must be less than or equal to {}", QUESTIONNAIRE_MAX_RATING),
                )),
                Some(_) => {}
            },
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    serde_json::from_value(value.clone())
        .map_err(|e| vec![FieldError::new(field_name("questionnaire"), e.to_string())])
}

pub fn validate_new_appointment(
    request: CreateAppointmentRequest,
    default_duration: i32,
) -> Result<NewAppointment, Vec<FieldError>> {
    let mut errors = Vec::new();

    let patient_name = match request.patient_name.as_deref().map(str::trim) {
        Some(name) => check_name(name, &mut errors),
        None => {
            errors.push(FieldError::new("patientName", "Required"));
            None
        }
    };

    let patient_email = match request.patient_email.as_deref().map(str::trim) {
        Some(email) => check_email(email, &mut errors),
        None => {
            errors.push(FieldError::new("patientEmail", "Required"));
            None
        }
    };

    let date = match request.date.as_deref() {
        Some(raw) => check_date(raw, &mut errors),
        None => {
            errors.push(FieldError::new("date", "Required"));
            None
        }
    };

    let duration = match request.duration {
        Some(minutes) => check_duration(minutes, &mut errors),
        None => Some(default_duration),
    };

    let appointment_type = match request.appointment_type.as_deref().map(str::trim) {
        Some(kind) => check_type(kind, &mut errors),
        None => Some(DEFAULT_APPOINTMENT_TYPE.to_string()),
    };

    let questionnaire = check_questionnaire(request.questionnaire.as_ref(), &mut errors);

    match (patient_name, patient_email, date, duration, appointment_type) {
        (Some(patient_name), Some(patient_email), Some(date), Some(duration), Some(appointment_type))
            if errors.is_empty() =>
        {
            Ok(NewAppointment {
                user_id: request.user_id,
                patient_name,
                patient_email,
                date,
                duration,
                appointment_type,
                status: request.status.unwrap_or(AppointmentStatus::Pending),
                zoom_meeting_id: None,
                zoom_meeting_url: None,
                zoom_meeting_password: None,
                questionnaire,
            })
        }
        _ => Err(errors),
    }
}

pub fn validate_changes(request: UpdateAppointmentRequest) -> Result<AppointmentChanges, Vec<FieldError>> {
    let mut errors = Vec::new();

    let changes = AppointmentChanges {
        user_id: request.user_id,
        patient_name: request
            .patient_name
            .as_deref()
            .and_then(|name| check_name(name.trim(), &mut errors)),
        patient_email: request
            .patient_email
            .as_deref()
            .and_then(|email| check_email(email.trim(), &mut errors)),
        date: request.date.as_deref().and_then(|raw| check_date(raw, &mut errors)),
        duration: request.duration.and_then(|minutes| check_duration(minutes, &mut errors)),
        appointment_type: request
            .appointment_type
            .as_deref()
            .and_then(|kind| check_type(kind.trim(), &mut errors)),
        status: request.status,
        zoom_meeting_id: request.zoom_meeting_id,
        zoom_meeting_url: request.zoom_meeting_url,
        zoom_meeting_password: request.zoom_meeting_password,
        questionnaire: check_questionnaire(request.questionnaire.as_ref(), &mut errors),
    };

    if errors.is_empty() {
        Ok(changes)
    } else {
        Err(errors)
    }
}

fn check_name(name: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    if name.is_empty() {
        errors.push(FieldError::new("patientName", "Name is required"));
        None
    } else if name.chars().count() > MAX_NAME_LENGTH {
        errors.push(FieldError::new(
            "patientName",
            format!("Name must be at most {} characters", MAX_NAME_LENGTH),
        ));
        None
    } else {
        Some(name.to_string())
    }
}

fn check_email(email: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    if is_valid_email(email) {
        Some(email.to_string())
    } else {
        errors.push(FieldError::new("patientEmail", "Invalid email"));
        None
    }
}

fn check_date(raw: &str, errors: &mut Vec<FieldError>) -> Option<DateTime<Utc>> {
    let parsed = parse_datetime(raw);
    if parsed.is_none() {
        errors.push(FieldError::new("date", UNPARSEABLE_DATE));
    }
    parsed
}

fn check_duration(minutes: i32, errors: &mut Vec<FieldError>) -> Option<i32> {
    if (1..=MAX_DURATION_MINUTES).contains(&minutes) {
        Some(minutes)
    } else {
        errors.push(FieldError::new(
            "duration",
            format!("Duration must be between 1 and {} minutes", MAX_DURATION_MINUTES),
        ));
        None
    }
}

fn check_type(kind: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    if kind.is_empty() {
        errors.push(FieldError::new("type", "Type must not be empty"));
        None
    } else {
        Some(kind.to_string())
    }
}

fn check_questionnaire(value: Option<&Value>, errors: &mut Vec<FieldError>) -> Option<Questionnaire> {
    match value {
        None | Some(Value::Null) => None,
        Some(value) => match validate_questionnaire(value, "questionnaire") {
            Ok(questionnaire) => Some(questionnaire),
            Err(mut field_errors) => {
                errors.append(&mut field_errors);
                None
            }
        },
    }
}
