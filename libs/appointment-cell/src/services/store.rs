// libs/appointment-cell/src/services/store.rs
use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::{Appointment, AppointmentChanges, NewAppointment};

#[derive(Default)]
struct StoreInner {
    appointments: BTreeMap<i64, Appointment>,
    last_id: i64,
}

/// Process-local appointment records keyed by an auto-incrementing id.
///
/// Every operation takes the lock exactly once, so operations never
/// interleave. Nothing survives a restart.
#[derive(Default)]
pub struct AppointmentStore {
    inner: RwLock<StoreInner>,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, new: NewAppointment) -> Appointment {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;

        let appointment = Appointment {
            id: inner.last_id,
            user_id: new.user_id,
            patient_name: new.patient_name,
            patient_email: new.patient_email,
            date: new.date,
            duration: new.duration,
            appointment_type: new.appointment_type,
            status: new.status,
            zoom_meeting_id: new.zoom_meeting_id,
            zoom_meeting_url: new.zoom_meeting_url,
            zoom_meeting_password: new.zoom_meeting_password,
            questionnaire: new.questionnaire,
        };

        inner.appointments.insert(appointment.id, appointment.clone());
        debug!("Stored appointment {}", appointment.id);
        appointment
    }

    pub async fn get(&self, id: i64) -> Option<Appointment> {
        self.inner.read().await.appointments.get(&id).cloned()
    }

    pub async fn list(&self) -> Vec<Appointment> {
        self.filtered(|_| true).await
    }

    /// Appointments starting on `date` (UTC calendar day).
    pub async fn find_by_date(&self, date: NaiveDate) -> Vec<Appointment> {
        self.filtered(|a| a.date.date_naive() == date).await
    }

    /// Appointments starting within `[start, end]`.
    pub async fn find_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<Appointment> {
        self.filtered(|a| a.date >= start && a.date <= end).await
    }

    pub async fn find_by_user(&self, user_id: i64) -> Vec<Appointment> {
        self.filtered(|a| a.user_id == Some(user_id)).await
    }

    /// Shallow merge of the provided fields. `None` when `id` is unknown.
    pub async fn update(&self, id: i64, changes: AppointmentChanges) -> Option<Appointment> {
        let mut inner = self.inner.write().await;
        let appointment = inner.appointments.get_mut(&id)?;

        let AppointmentChanges {
            user_id,
            patient_name,
            patient_email,
            date,
            duration,
            appointment_type,
            status,
            zoom_meeting_id,
            zoom_meeting_url,
            zoom_meeting_password,
            questionnaire,
        } = changes;

        if user_id.is_some() {
            appointment.user_id = user_id;
        }
        if let Some(patient_name) = patient_name {
            appointment.patient_name = patient_name;
        }
        if let Some(patient_email) = patient_email {
            appointment.patient_email = patient_email;
        }
        if let Some(date) = date {
            appointment.date = date;
        }
        if let Some(duration) = duration {
            appointment.duration = duration;
        }
        if let Some(appointment_type) = appointment_type {
            appointment.appointment_type = appointment_type;
        }
        if let Some(status) = status {
            appointment.status = status;
        }
        if zoom_meeting_id.is_some() {
            appointment.zoom_meeting_id = zoom_meeting_id;
        }
        if zoom_meeting_url.is_some() {
            appointment.zoom_meeting_url = zoom_meeting_url;
        }
        if zoom_meeting_password.is_some() {
            appointment.zoom_meeting_password = zoom_meeting_password;
        }
        if questionnaire.is_some() {
            appointment.questionnaire = questionnaire;
        }

        debug!("Updated appointment {}", id);
        Some(appointment.clone())
    }

    pub async fn delete(&self, id: i64) -> bool {
        let removed = self.inner.write().await.appointments.remove(&id).is_some();
        if removed {
            debug!("Deleted appointment {}", id);
        }
        removed
    }

    async fn filtered<F>(&self, predicate: F) -> Vec<Appointment>
    where
        F: Fn(&Appointment) -> bool,
    {
        self.inner
            .read()
            .await
            .appointments
            .values()
            .filter(|a| predicate(a))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::models::{AppointmentStatus, DEFAULT_APPOINTMENT_TYPE};

    fn new_appointment(day: u32, hour: u32, user_id: Option<i64>) -> NewAppointment {
        NewAppointment {
            user_id,
            patient_name: "Jane Doe".into(),
            patient_email: "jane@example.com".into(),
            date: Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap(),
            duration: 45,
            appointment_type: DEFAULT_APPOINTMENT_TYPE.into(),
            status: AppointmentStatus::Pending,
            zoom_meeting_id: None,
            zoom_meeting_url: None,
            zoom_meeting_password: None,
            questionnaire: None,
        }
    }

    #[tokio::test]
    async fn test_ids_are_positive_and_never_reused() {
        let store = AppointmentStore::new();

        let first = store.create(new_appointment(10, 9, None)).await;
        let second = store.create(new_appointment(10, 10, None)).await;
        assert_eq!((first.id, second.id), (1, 2));

        assert!(store.delete(second.id).await);
        let third = store.create(new_appointment(10, 11, None)).await;
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn test_find_by_date_matches_calendar_day() {
        let store = AppointmentStore::new();
        store.create(new_appointment(10, 9, None)).await;
        store.create(new_appointment(10, 23, None)).await;
        store.create(new_appointment(11, 0, None)).await;

        let found = store
            .find_by_date(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap())
            .await;
        assert_eq!(found.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_find_by_date_range_is_inclusive() {
        let store = AppointmentStore::new();
        store.create(new_appointment(10, 9, None)).await;
        store.create(new_appointment(12, 9, None)).await;
        store.create(new_appointment(14, 9, None)).await;

        let found = store
            .find_by_date_range(
                Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2025, 3, 12, 9, 0, 0).unwrap(),
            )
            .await;
        assert_eq!(found.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_find_by_user() {
        let store = AppointmentStore::new();
        store.create(new_appointment(10, 9, Some(7))).await;
        store.create(new_appointment(10, 10, Some(8))).await;
        store.create(new_appointment(10, 11, Some(7))).await;

        let found = store.find_by_user(7).await;
        assert_eq!(found.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 3]);
        assert!(store.find_by_user(99).await.is_empty());
    }

    #[tokio::test]
    async fn test_update_merges_only_provided_fields() {
        let store = AppointmentStore::new();
        let created = store.create(new_appointment(10, 9, None)).await;

        let updated = store
            .update(
                created.id,
                AppointmentChanges {
                    status: Some(AppointmentStatus::Confirmed),
                    duration: Some(60),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status, AppointmentStatus::Confirmed);
        assert_eq!(updated.duration, 60);
        assert_eq!(updated.patient_name, created.patient_name);
        assert_eq!(updated.date, created.date);
        assert_eq!(store.get(created.id).await, Some(updated));
    }

    #[tokio::test]
    async fn test_unknown_ids() {
        let store = AppointmentStore::new();

        assert!(store.get(42).await.is_none());
        assert!(store.update(42, AppointmentChanges::default()).await.is_none());
        assert!(!store.delete(42).await);
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let store = AppointmentStore::new();
        let created = store.create(new_appointment(10, 9, None)).await;

        assert!(store.delete(created.id).await);
        assert!(store.get(created.id).await.is_none());
        assert!(store.list().await.is_empty());
    }
}
