// libs/appointment-cell/src/services/slots.rs
use std::collections::HashSet;

use chrono::{DateTime, Timelike, Utc};

use crate::models::{AppointmentError, TimeSlot};

/// 12-hour clock label used for slots and bookings alike, e.g. `9:00 AM`.
pub fn time_label(hour: u32, minute: u32) -> String {
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    let period = if hour < 12 { "AM" } else { "PM" };
    format!("{}:{:02} {}", display_hour, minute, period)
}

/// Label of the slot a booking occupies (its UTC start time).
pub fn label_for(start: &DateTime<Utc>) -> String {
    time_label(start.hour(), start.minute())
}

/// Every `interval_minutes` boundary within each hour of `[start_hour, end_hour)`.
///
/// A slot is unavailable iff its label equals one of `occupied`. Matching is
/// by label only; a booking longer than the interval does not block the
/// following slots.
pub fn generate_time_slots(
    start_hour: u32,
    end_hour: u32,
    interval_minutes: u32,
    occupied: &[String],
) -> Result<Vec<TimeSlot>, AppointmentError> {
    if interval_minutes == 0 {
        return Err(AppointmentError::InvalidSlotWindow(
            "interval must be at least one minute".to_string(),
        ));
    }
    if start_hour >= end_hour || end_hour > 24 {
        return Err(AppointmentError::InvalidSlotWindow(format!(
            "hours {}..{} do not form a window within the day",
            start_hour, end_hour
        )));
    }

    let occupied: HashSet<&str> = occupied.iter().map(String::as_str).collect();

    let slots = (start_hour..end_hour)
        .flat_map(|hour| {
            (0..60)
                .step_by(interval_minutes as usize)
                .map(move |minute| time_label(hour, minute))
        })
        .map(|label| TimeSlot {
            available: !occupied.contains(label.as_str()),
            label,
        })
        .collect();

    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::TimeZone;

    fn labels(slots: &[TimeSlot]) -> Vec<&str> {
        slots.iter().map(|s| s.label.as_str()).collect()
    }

    #[test]
    fn test_time_labels() {
        assert_eq!(time_label(0, 0), "12:00 AM");
        assert_eq!(time_label(9, 0), "9:00 AM");
        assert_eq!(time_label(11, 45), "11:45 AM");
        assert_eq!(time_label(12, 0), "12:00 PM");
        assert_eq!(time_label(13, 30), "1:30 PM");
        assert_eq!(time_label(23, 5), "11:05 PM");
    }

    #[test]
    fn test_business_day_hourly_slots() {
        let slots = generate_time_slots(9, 17, 60, &[]).unwrap();

        assert_eq!(
            labels(&slots),
            vec![
                "9:00 AM", "10:00 AM", "11:00 AM", "12:00 PM",
                "1:00 PM", "2:00 PM", "3:00 PM", "4:00 PM",
            ]
        );
        assert!(slots.iter().all(|s| s.available));
    }

    #[test]
    fn test_booked_label_is_unavailable() {
        let slots = generate_time_slots(9, 17, 60, &["9:00 AM".to_string()]).unwrap();

        assert!(!slots[0].available);
        assert!(slots[1..].iter().all(|s| s.available));
    }

    #[test]
    fn test_half_hour_interval_and_label_only_matching() {
        let booked = label_for(&Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap());
        let slots = generate_time_slots(9, 11, 30, &[booked]).unwrap();

        assert_eq!(labels(&slots), vec!["9:00 AM", "9:30 AM", "10:00 AM", "10:30 AM"]);
        // a 45 minute booking at 9:00 does not block 9:30
        assert!(!slots[0].available);
        assert!(slots[1].available);
    }

    #[test]
    fn test_unknown_or_off_grid_labels_block_nothing() {
        let occupied = vec!["9:15 AM".to_string(), "09:00".to_string()];
        let slots = generate_time_slots(9, 17, 60, &occupied).unwrap();

        assert!(slots.iter().all(|s| s.available));
    }

    #[test]
    fn test_interval_longer_than_an_hour() {
        let slots = generate_time_slots(9, 12, 90, &[]).unwrap();
        assert_eq!(labels(&slots), vec!["9:00 AM", "10:00 AM", "11:00 AM"]);
    }

    #[test]
    fn test_invalid_windows_are_rejected() {
        assert_matches!(generate_time_slots(9, 17, 0, &[]), Err(AppointmentError::InvalidSlotWindow(_)));
        assert_matches!(generate_time_slots(17, 9, 60, &[]), Err(AppointmentError::InvalidSlotWindow(_)));
        assert_matches!(generate_time_slots(9, 25, 60, &[]), Err(AppointmentError::InvalidSlotWindow(_)));
    }
}
