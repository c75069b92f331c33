// libs/availability-cell/src/handlers.rs
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
use tracing::info;

use shared_models::error::{AppError, FieldError};

use crate::models::{
    AvailabilityError, AvailabilityQuery, AvailabilityRule, AvailabilityRuleRequest,
    AvailableDatesResponse,
};
use crate::services::resolver::resolve_range;
use crate::services::store::AvailabilityStore;
use crate::services::validation::{parse_day, validate_new_rule, validate_rule_changes};

fn read_body(
    payload: Result<Json<AvailabilityRuleRequest>, JsonRejection>,
) -> Result<AvailabilityRuleRequest, AppError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        AppError::validation(
            "Invalid availability data",
            vec![FieldError::new("body", rejection.body_text())],
        )
    })
}

fn read_rule_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// With `start` and `end` this answers which dates can be booked; without
/// them it lists every rule.
pub async fn get_availability(
    State(store): State<Arc<AvailabilityStore>>,
    query: Result<Query<AvailabilityQuery>, QueryRejection>,
) -> Result<Json<Value>, AppError> {
    let Query(query) = query.map_err(|r| AppError::BadRequest(r.body_text()))?;

    match (query.start.as_deref(), query.end.as_deref()) {
        (Some(start), Some(end)) => {
            let available_dates = resolve_range(start, end)?;
            Ok(Json(json!(AvailableDatesResponse { available_dates })))
        }
        (None, None) => Ok(Json(json!(store.list().await))),
        _ => Err(AvailabilityError::InvalidRange(
            "Both start and end parameters are required".into(),
        )
        .into()),
    }
}

pub async fn get_availability_by_day(
    State(store): State<Arc<AvailabilityStore>>,
    Path(day): Path<String>,
) -> Result<Json<Vec<AvailabilityRule>>, AppError> {
    let day_of_week = parse_day(&day)?;
    Ok(Json(store.by_day(day_of_week).await))
}

pub async fn create_availability(
    State(store): State<Arc<AvailabilityStore>>,
    payload: Result<Json<AvailabilityRuleRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AvailabilityRule>), AppError> {
    let request = read_body(payload)?;
    let new_rule = validate_new_rule(request, None).map_err(AvailabilityError::Validation)?;

    let rule = store.create(new_rule).await;
    info!("Availability rule {} created", rule.id);
    Ok((StatusCode::CREATED, Json(rule)))
}

pub async fn create_availability_for_day(
    State(store): State<Arc<AvailabilityStore>>,
    Path(day): Path<String>,
    payload: Result<Json<AvailabilityRuleRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AvailabilityRule>), AppError> {
    let day_of_week = parse_day(&day)?;
    let request = read_body(payload)?;
    let new_rule =
        validate_new_rule(request, Some(day_of_week)).map_err(AvailabilityError::Validation)?;

    let rule = store.create(new_rule).await;
    info!("Availability rule {} created for day {}", rule.id, day_of_week);
    Ok((StatusCode::CREATED, Json(rule)))
}

pub async fn update_availability(
    State(store): State<Arc<AvailabilityStore>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<AvailabilityRuleRequest>, JsonRejection>,
) -> Result<Json<AvailabilityRule>, AppError> {
    let rule_id = read_rule_id(path)?;
    let request = read_body(payload)?;
    let changes = validate_rule_changes(request).map_err(AvailabilityError::Validation)?;

    let rule = store.update(rule_id, changes).await?;
    Ok(Json(rule))
}

pub async fn delete_availability(
    State(store): State<Arc<AvailabilityStore>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let rule_id = read_rule_id(path)?;
    if store.delete(rule_id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AvailabilityError::NotFound.into())
    }
}
