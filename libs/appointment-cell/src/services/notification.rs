// libs/appointment-cell/src/services/notification.rs
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::Appointment;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Notification delivery failed: {0}")]
    DeliveryFailed(String),
}

/// Delivers patient-facing messages about their appointment.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, notification: &Notification) -> Result<(), NotificationError>;
}

/// Email stand-in that writes the message to the log.
#[derive(Default)]
pub struct LoggingNotifier;

#[async_trait]
impl Notifier for LoggingNotifier {
    async fn send(&self, notification: &Notification) -> Result<(), NotificationError> {
        info!(
            to = %notification.to,
            subject = %notification.subject,
            "Sending email notification"
        );
        tracing::debug!("Email body: {}", notification.body);
        Ok(())
    }
}

/// Send on a detached task. The caller never waits and never sees a failure.
pub fn dispatch(notifier: Arc<dyn Notifier>, notification: Notification) {
    tokio::spawn(async move {
        if let Err(e) = notifier.send(&notification).await {
            warn!("Failed to notify {}: {}", notification.to, e);
        }
    });
}

fn format_when(appointment: &Appointment) -> String {
    appointment.date.format("%A, %B %-d, %Y at %-I:%M %p UTC").to_string()
}

fn meeting_lines(appointment: &Appointment) -> String {
    format!(
        "Join Zoom Meeting:\n{}\nPassword: {}",
        appointment.zoom_meeting_url.as_deref().unwrap_or("(link pending)"),
        appointment.zoom_meeting_password.as_deref().unwrap_or("-")
    )
}

pub fn confirmation(clinic_name: &str, appointment: &Appointment) -> Notification {
    Notification {
        to: appointment.patient_email.clone(),
        subject: format!("{}: Appointment Confirmation", clinic_name),
        body: format!(
            "Hello {},\n\nYour appointment has been scheduled for {}.\n\n\
             Appointment Details:\n- Type: {}\n- Duration: {} minutes (ends {})\n\n{}\n\n\
             Thank you for choosing {}!",
            appointment.patient_name,
            format_when(appointment),
            appointment.appointment_type,
            appointment.duration,
            appointment.scheduled_end_time().format("%-I:%M %p UTC"),
            meeting_lines(appointment),
            clinic_name
        ),
    }
}

pub fn rescheduled(clinic_name: &str, appointment: &Appointment) -> Notification {
    Notification {
        to: appointment.patient_email.clone(),
        subject: format!("{}: Appointment Updated", clinic_name),
        body: format!(
            "Hello {},\n\nYour appointment has been updated to {}.\n\n{}",
            appointment.patient_name,
            format_when(appointment),
            meeting_lines(appointment)
        ),
    }
}

pub fn cancellation(clinic_name: &str, appointment: &Appointment) -> Notification {
    Notification {
        to: appointment.patient_email.clone(),
        subject: format!("{}: Appointment Cancelled", clinic_name),
        body: format!(
            "Hello {},\n\nYour appointment scheduled for {} has been cancelled.\n\n\
             If you would like to reschedule, please visit our website.",
            appointment.patient_name,
            format_when(appointment)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::models::AppointmentStatus;

    fn appointment() -> Appointment {
        Appointment {
            id: 1,
            user_id: None,
            patient_name: "Jane Doe".into(),
            patient_email: "jane@example.com".into(),
            date: Utc.with_ymd_and_hms(2025, 3, 10, 14, 0, 0).unwrap(),
            duration: 45,
            appointment_type: "Initial Consultation".into(),
            status: AppointmentStatus::Pending,
            zoom_meeting_id: Some("zoom-123".into()),
            zoom_meeting_url: Some("https://zoom.us/j/123".into()),
            zoom_meeting_password: Some("abc123".into()),
            questionnaire: None,
        }
    }

    #[test]
    fn test_confirmation_content() {
        let message = confirmation("Telehealth Clinic", &appointment());

        assert_eq!(message.to, "jane@example.com");
        assert_eq!(message.subject, "Telehealth Clinic: Appointment Confirmation");
        assert!(message.body.contains("Monday, March 10, 2025 at 2:00 PM UTC"));
        assert!(message.body.contains("ends 2:45 PM UTC"));
        assert!(message.body.contains("https://zoom.us/j/123"));
        assert!(message.body.contains("Password: abc123"));
    }

    #[test]
    fn test_update_and_cancellation_subjects() {
        assert_eq!(
            rescheduled("Clinic", &appointment()).subject,
            "Clinic: Appointment Updated"
        );
        let cancelled = cancellation("Clinic", &appointment());
        assert_eq!(cancelled.subject, "Clinic: Appointment Cancelled");
        assert!(cancelled.body.contains("has been cancelled"));
    }

    #[tokio::test]
    async fn test_logging_notifier_succeeds() {
        let notifier = LoggingNotifier;
        assert!(notifier.send(&confirmation("Clinic", &appointment())).await.is_ok());
    }
}
