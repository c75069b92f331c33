// libs/availability-cell/src/services/validation.rs
use shared_models::error::FieldError;
use shared_utils::validation::parse_clock_time;

use crate::models::{
    AvailabilityError, AvailabilityRuleChanges, AvailabilityRuleRequest, NewAvailabilityRule,
    SATURDAY, SUNDAY,
};

pub fn parse_day(raw: &str) -> Result<u8, AvailabilityError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(checked_day)
        .ok_or(AvailabilityError::InvalidDay)
}

fn checked_day(day: i64) -> Option<u8> {
    (i64::from(SUNDAY)..=i64::from(SATURDAY))
        .contains(&day)
        .then_some(day as u8)
}

/// `day_override` comes from the path and wins over any `dayOfWeek` in the body.
pub fn validate_new_rule(
    request: AvailabilityRuleRequest,
    day_override: Option<u8>,
) -> Result<NewAvailabilityRule, Vec<FieldError>> {
    let mut errors = Vec::new();

    let day_of_week = match (day_override, request.day_of_week) {
        (Some(day), _) => Some(day),
        (None, Some(day)) => check_day(day, &mut errors),
        (None, None) => {
            errors.push(FieldError::new("dayOfWeek", "Required"));
            None
        }
    };

    let start_time = required_time("startTime", request.start_time.as_deref(), &mut errors);
    let end_time = required_time("endTime", request.end_time.as_deref(), &mut errors);

    if let (Some((_, start)), Some((_, end))) = (&start_time, &end_time) {
        check_order(*start, *end, &mut errors);
    }

    match (day_of_week, start_time, end_time) {
        (Some(day_of_week), Some((start_time, _)), Some((end_time, _))) if errors.is_empty() => {
            Ok(NewAvailabilityRule {
                day_of_week,
                start_time,
                end_time,
                is_available: request.is_available.unwrap_or(true),
            })
        }
        _ => Err(errors),
    }
}

/// Field checks only; ordering against the stored rule happens in the store.
pub fn validate_rule_changes(
    request: AvailabilityRuleRequest,
) -> Result<AvailabilityRuleChanges, Vec<FieldError>> {
    let mut errors = Vec::new();

    let changes = AvailabilityRuleChanges {
        day_of_week: request.day_of_week.and_then(|day| check_day(day, &mut errors)),
        start_time: request
            .start_time
            .as_deref()
            .and_then(|raw| check_time("startTime", raw, &mut errors))
            .map(|(label, _)| label),
        end_time: request
            .end_time
            .as_deref()
            .and_then(|raw| check_time("endTime", raw, &mut errors))
            .map(|(label, _)| label),
        is_available: request.is_available,
    };

    if errors.is_empty() {
        Ok(changes)
    } else {
        Err(errors)
    }
}

pub fn check_order(start_minutes: u32, end_minutes: u32, errors: &mut Vec<FieldError>) {
    if start_minutes >= end_minutes {
        errors.push(FieldError::new("endTime", "End time must be after start time"));
    }
}

fn check_day(day: i64, errors: &mut Vec<FieldError>) -> Option<u8> {
    let checked = checked_day(day);
    if checked.is_none() {
        errors.push(FieldError::new(
            "dayOfWeek",
            AvailabilityError::InvalidDay.to_string(),
        ));
    }
    checked
}

fn required_time(
    field: &str,
    raw: Option<&str>,
    errors: &mut Vec<FieldError>,
) -> Option<(String, u32)> {
    match raw {
        Some(raw) => check_time(field, raw, errors),
        None => {
            errors.push(FieldError::new(field, "Required"));
            None
        }
    }
}

fn check_time(field: &str, raw: &str, errors: &mut Vec<FieldError>) -> Option<(String, u32)> {
    let raw = raw.trim();
    match parse_clock_time(raw) {
        Some(minutes) => Some((raw.to_string(), minutes)),
        None => {
            errors.push(FieldError::new(field, "Expected HH:MM (24-hour)"));
            None
        }
    }
}
