// libs/appointment-cell/src/services/booking.rs
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use shared_config::AppConfig;
use shared_utils::validation::{is_bare_date, parse_datetime, parse_query_date};
use video_conferencing_cell::{
    provision_or_fallback, MeetingDetails, MeetingProvisioner, MeetingRequest,
};

use crate::models::{
    Appointment, AppointmentChanges, AppointmentError, AppointmentListQuery,
    AvailableTimesResponse, CreateAppointmentRequest, UpdateAppointmentRequest,
};
use crate::services::notification::{self, Notifier};
use crate::services::slots::{generate_time_slots, label_for};
use crate::services::store::AppointmentStore;
use crate::services::validation::{validate_changes, validate_new_appointment};

/// Orchestrates a booking across validation, the meeting provisioner, the
/// store and the notifier.
pub struct AppointmentBookingService {
    config: Arc<AppConfig>,
    store: Arc<AppointmentStore>,
    provisioner: Arc<dyn MeetingProvisioner>,
    notifier: Arc<dyn Notifier>,
}

impl AppointmentBookingService {
    pub fn new(
        config: Arc<AppConfig>,
        store: Arc<AppointmentStore>,
        provisioner: Arc<dyn MeetingProvisioner>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            store,
            provisioner,
            notifier,
        }
    }

    pub async fn book_appointment(
        &self,
        request: CreateAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        let mut new_appointment =
            validate_new_appointment(request, self.config.default_appointment_duration)
                .map_err(AppointmentError::Validation)?;

        let meeting = self
            .provision_meeting(
                &new_appointment.appointment_type,
                new_appointment.date,
                new_appointment.duration,
            )
            .await;
        new_appointment.zoom_meeting_id = Some(meeting.id);
        new_appointment.zoom_meeting_url = Some(meeting.join_url);
        new_appointment.zoom_meeting_password = Some(meeting.password);

        let appointment = self.store.create(new_appointment).await;
        info!(
            "Booked appointment {} for {} at {}",
            appointment.id, appointment.patient_email, appointment.date
        );

        notification::dispatch(
            Arc::clone(&self.notifier),
            notification::confirmation(&self.config.clinic_name, &appointment),
        );

        Ok(appointment)
    }

    pub async fn get_appointment(&self, id: i64) -> Result<Appointment, AppointmentError> {
        self.store.get(id).await.ok_or(AppointmentError::NotFound)
    }

    /// All appointments, narrowed by whichever filters the query carries.
    pub async fn list_appointments(
        &self,
        query: AppointmentListQuery,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        let mut appointments = if let Some(raw) = query.date.as_deref() {
            let date = parse_query_date(raw)
                .ok_or_else(|| AppointmentError::InvalidQuery("Invalid date parameter".into()))?;
            self.store.find_by_date(date).await
        } else if query.start.is_some() || query.end.is_some() {
            let (start, end) = parse_range(query.start.as_deref(), query.end.as_deref())?;
            self.store.find_by_date_range(start, end).await
        } else if let Some(user_id) = query.user_id {
            self.store.find_by_user(user_id).await
        } else {
            self.store.list().await
        };

        if let Some(user_id) = query.user_id {
            appointments.retain(|a| a.user_id == Some(user_id));
        }

        debug!("Listing {} appointments", appointments.len());
        Ok(appointments)
    }

    /// Shallow merge. A new `date` gets a freshly provisioned meeting and an
    /// "updated" notification.
    pub async fn update_appointment(
        &self,
        id: i64,
        request: UpdateAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        let mut changes = validate_changes(request).map_err(AppointmentError::Validation)?;
        let existing = self.get_appointment(id).await?;

        let rescheduled = changes.date.is_some_and(|date| date != existing.date);
        if rescheduled {
            self.attach_new_meeting(&existing, &mut changes).await;
        }

        let appointment = self
            .store
            .update(id, changes)
            .await
            .ok_or(AppointmentError::NotFound)?;

        if rescheduled {
            info!("Appointment {} rescheduled to {}", id, appointment.date);
            notification::dispatch(
                Arc::clone(&self.notifier),
                notification::rescheduled(&self.config.clinic_name, &appointment),
            );
        } else {
            info!("Appointment {} updated", id);
        }

        Ok(appointment)
    }

    /// Hard delete followed by a cancellation notice.
    pub async fn cancel_appointment(&self, id: i64) -> Result<(), AppointmentError> {
        let appointment = self.get_appointment(id).await?;

        if !self.store.delete(id).await {
            return Err(AppointmentError::NotFound);
        }
        info!("Appointment {} deleted", id);

        notification::dispatch(
            Arc::clone(&self.notifier),
            notification::cancellation(&self.config.clinic_name, &appointment),
        );

        Ok(())
    }

    /// Business-hours slots for `date`, with the label of every stored
    /// appointment on that day unavailable.
    pub async fn available_times(
        &self,
        date: Option<&str>,
        interval: Option<u32>,
    ) -> Result<AvailableTimesResponse, AppointmentError> {
        let raw = date
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| AppointmentError::InvalidQuery("Date parameter is required".into()))?;
        let date = parse_query_date(raw)
            .ok_or_else(|| AppointmentError::InvalidQuery("Invalid date parameter".into()))?;

        let mut unavailable_times: Vec<String> = Vec::new();
        for appointment in self.store.find_by_date(date).await {
            let label = label_for(&appointment.date);
            if !unavailable_times.contains(&label) {
                unavailable_times.push(label);
            }
        }

        let slots = generate_time_slots(
            self.config.business_start_hour,
            self.config.business_end_hour,
            interval.unwrap_or(self.config.slot_interval_minutes),
            &unavailable_times,
        )?;

        Ok(AvailableTimesResponse {
            date,
            unavailable_times,
            slots,
        })
    }

    async fn attach_new_meeting(&self, existing: &Appointment, changes: &mut AppointmentChanges) {
        let Some(date) = changes.date else {
            return;
        };
        let appointment_type = changes
            .appointment_type
            .as_deref()
            .unwrap_or(&existing.appointment_type);
        let duration = changes.duration.unwrap_or(existing.duration);

        let meeting = self.provision_meeting(appointment_type, date, duration).await;
        changes.zoom_meeting_id = Some(meeting.id);
        changes.zoom_meeting_url = Some(meeting.join_url);
        changes.zoom_meeting_password = Some(meeting.password);
    }

    async fn provision_meeting(
        &self,
        appointment_type: &str,
        start_time: DateTime<Utc>,
        duration_minutes: i32,
    ) -> MeetingDetails {
        let request = MeetingRequest {
            topic: format!("{} Appointment - {}", self.config.clinic_name, appointment_type),
            start_time,
            duration_minutes,
        };
        provision_or_fallback(
            self.provisioner.as_ref(),
            &request,
            &self.config.meeting_base_url,
        )
        .await
    }
}

/// Inclusive `[start, end]` from query strings. A bare-date `end` covers
/// that whole day.
fn parse_range(
    start: Option<&str>,
    end: Option<&str>,
) -> Result<(DateTime<Utc>, DateTime<Utc>), AppointmentError> {
    let (Some(start_raw), Some(end_raw)) = (start, end) else {
        return Err(AppointmentError::InvalidQuery(
            "Both start and end parameters are required".into(),
        ));
    };

    let start = parse_datetime(start_raw)
        .ok_or_else(|| AppointmentError::InvalidQuery("Invalid start parameter".into()))?;
    let mut end = parse_datetime(end_raw)
        .ok_or_else(|| AppointmentError::InvalidQuery("Invalid end parameter".into()))?;

    if is_bare_date(end_raw) {
        end = end + Duration::days(1) - Duration::milliseconds(1);
    }

    Ok((start, end))
}
