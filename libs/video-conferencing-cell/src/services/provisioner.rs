// libs/video-conferencing-cell/src/services/provisioner.rs
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};
use tracing::{debug, info, warn};

use crate::models::{MeetingDetails, MeetingRequest, VideoConferencingError};
use crate::services::settings::ZoomSettingsStore;

const PASSWORD_LENGTH: usize = 6;

/// Issues a video meeting for an appointment.
#[async_trait]
pub trait MeetingProvisioner: Send + Sync {
    async fn create_meeting(
        &self,
        request: &MeetingRequest,
    ) -> Result<MeetingDetails, VideoConferencingError>;
}

/// Stand-in for the Zoom API: mints a random meeting number and password.
pub struct SimulatedZoomProvisioner {
    base_url: String,
    settings: Arc<ZoomSettingsStore>,
}

impl SimulatedZoomProvisioner {
    pub fn new(base_url: impl Into<String>, settings: Arc<ZoomSettingsStore>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            settings,
        }
    }
}

#[async_trait]
impl MeetingProvisioner for SimulatedZoomProvisioner {
    async fn create_meeting(
        &self,
        request: &MeetingRequest,
    ) -> Result<MeetingDetails, VideoConferencingError> {
        match self.settings.get().await {
            Some(settings) if settings.has_credentials() => {
                debug!(
                    "Zoom credentials present for {:?}, issuing simulated meeting",
                    settings.zoom_email
                );
            }
            _ => debug!("Zoom credentials not configured, issuing simulated meeting"),
        }

        let meeting_number = meeting_number();
        let details = MeetingDetails {
            id: format!("zoom-{}", meeting_number),
            join_url: format!("{}/{}", self.base_url, meeting_number),
            password: meeting_password(),
        };

        info!(
            "Created meeting {} for '{}' at {} ({} min)",
            details.id, request.topic, request.start_time, request.duration_minutes
        );

        Ok(details)
    }
}

/// Locally generated meeting used when the provisioner fails.
pub fn fallback_meeting(base_url: &str) -> MeetingDetails {
    let meeting_number = meeting_number();
    MeetingDetails {
        id: format!("fallback-meeting-{}", Utc::now().timestamp_millis()),
        join_url: format!("{}/{}", base_url.trim_end_matches('/'), meeting_number),
        password: meeting_password(),
    }
}

/// Never fails: a provisioning error is logged and replaced by a fallback meeting.
pub async fn provision_or_fallback(
    provisioner: &dyn MeetingProvisioner,
    request: &MeetingRequest,
    base_url: &str,
) -> MeetingDetails {
    match provisioner.create_meeting(request).await {
        Ok(details) => details,
        Err(e) => {
            warn!("Failed to create meeting for '{}': {}. Using fallback", request.topic, e);
            fallback_meeting(base_url)
        }
    }
}

fn meeting_number() -> u64 {
    rand::thread_rng().gen_range(100_000_000..10_000_000_000)
}

fn meeting_password() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(PASSWORD_LENGTH)
        .map(|c| char::from(c).to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn request() -> MeetingRequest {
        MeetingRequest {
            topic: "Telehealth Clinic Appointment - Initial Consultation".into(),
            start_time: Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap(),
            duration_minutes: 45,
        }
    }

    struct FailingProvisioner;

    #[async_trait]
    impl MeetingProvisioner for FailingProvisioner {
        async fn create_meeting(
            &self,
            _request: &MeetingRequest,
        ) -> Result<MeetingDetails, VideoConferencingError> {
            Err(VideoConferencingError::ProvisioningFailed {
                message: "zoom unreachable".into(),
            })
        }
    }

    #[tokio::test]
    async fn test_simulated_meeting_shape() {
        let provisioner =
            SimulatedZoomProvisioner::new("https://zoom.us/j/", Arc::new(ZoomSettingsStore::new()));
        let meeting = provisioner.create_meeting(&request()).await.unwrap();

        let number = meeting.id.strip_prefix("zoom-").unwrap();
        assert_eq!(meeting.join_url, format!("https://zoom.us/j/{}", number));
        assert_eq!(meeting.password.len(), PASSWORD_LENGTH);
        assert!(meeting
            .password
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn test_failure_falls_back() {
        let meeting = provision_or_fallback(&FailingProvisioner, &request(), "https://zoom.us/j").await;

        assert!(meeting.id.starts_with("fallback-meeting-"));
        assert!(meeting.join_url.starts_with("https://zoom.us/j/"));
        assert_eq!(meeting.password.len(), PASSWORD_LENGTH);
    }
}
