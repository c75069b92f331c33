// libs/availability-cell/src/services/resolver.rs
use chrono::{Datelike, NaiveDate, Weekday};

use shared_utils::validation::parse_query_date;

use crate::models::AvailabilityError;

pub const MAX_RANGE_DAYS: i64 = 366;

/// Every weekday in `[start, end]`, ascending. Empty when `start > end`.
///
/// Rules are not consulted; weekends are closed and everything else is open.
pub fn available_dates(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| !matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
        .collect()
}

/// Resolve a range given as query strings, capped at [`MAX_RANGE_DAYS`].
pub fn resolve_range(start: &str, end: &str) -> Result<Vec<NaiveDate>, AvailabilityError> {
    let start = parse_query_date(start)
        .ok_or_else(|| AvailabilityError::InvalidRange("Invalid start date".into()))?;
    let end = parse_query_date(end)
        .ok_or_else(|| AvailabilityError::InvalidRange("Invalid end date".into()))?;

    if (end - start).num_days() >= MAX_RANGE_DAYS {
        return Err(AvailabilityError::InvalidRange(format!(
            "Date range must not exceed {} days",
            MAX_RANGE_DAYS
        )));
    }

    Ok(available_dates(start, end))
}
