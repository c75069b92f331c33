// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_models::error::{AppError, FieldError};

use crate::models::{
    Appointment, AppointmentListQuery, AvailableTimesQuery, AvailableTimesResponse,
    CreateAppointmentRequest, UpdateAppointmentRequest,
};
use crate::services::booking::AppointmentBookingService;
use crate::services::validation::validate_questionnaire;

fn invalid_body(message: &str, rejection: JsonRejection) -> AppError {
    AppError::validation(message, vec![FieldError::new("body", rejection.body_text())])
}

fn invalid_query(rejection: QueryRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}

fn invalid_id(rejection: PathRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}

// ==============================================================================
// APPOINTMENT HANDLERS
// ==============================================================================

pub async fn list_appointments(
    State(service): State<Arc<AppointmentBookingService>>,
    query: Result<Query<AppointmentListQuery>, QueryRejection>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let Query(query) = query.map_err(invalid_query)?;
    let appointments = service.list_appointments(query).await?;
    Ok(Json(appointments))
}

pub async fn create_appointment(
    State(service): State<Arc<AppointmentBookingService>>,
    payload: Result<Json<CreateAppointmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    let Json(request) = payload.map_err(|r| invalid_body("Invalid appointment data", r))?;
    let appointment = service.book_appointment(request).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

pub async fn get_available_times(
    State(service): State<Arc<AppointmentBookingService>>,
    query: Result<Query<AvailableTimesQuery>, QueryRejection>,
) -> Result<Json<AvailableTimesResponse>, AppError> {
    let Query(query) = query.map_err(invalid_query)?;
    let response = service
        .available_times(query.date.as_deref(), query.interval)
        .await?;
    Ok(Json(response))
}

pub async fn get_appointment(
    State(service): State<Arc<AppointmentBookingService>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Appointment>, AppError> {
    let Path(appointment_id) = path.map_err(invalid_id)?;
    let appointment = service.get_appointment(appointment_id).await?;
    Ok(Json(appointment))
}

pub async fn update_appointment(
    State(service): State<Arc<AppointmentBookingService>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateAppointmentRequest>, JsonRejection>,
) -> Result<Json<Appointment>, AppError> {
    let Path(appointment_id) = path.map_err(invalid_id)?;
    let Json(request) = payload.map_err(|r| invalid_body("Invalid appointment data", r))?;
    let appointment = service.update_appointment(appointment_id, request).await?;
    Ok(Json(appointment))
}

pub async fn delete_appointment(
    State(service): State<Arc<AppointmentBookingService>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(appointment_id) = path.map_err(invalid_id)?;
    service.cancel_appointment(appointment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ==============================================================================
// QUESTIONNAIRE
// ==============================================================================

/// Standalone check used by the intake form before booking.
pub async fn validate_questionnaire_handler(
    payload: Result<Json<Value>, JsonRejection>,
) -> (StatusCode, Json<Value>) {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            let errors = vec![FieldError::new("body", rejection.body_text())];
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "valid": false, "errors": errors })),
            );
        }
    };

    match validate_questionnaire(&body, "") {
        Ok(questionnaire) => (
            StatusCode::OK,
            Json(json!({ "valid": true, "data": questionnaire })),
        ),
        Err(errors) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "valid": false, "errors": errors })),
        ),
    }
}
