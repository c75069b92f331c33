// libs/video-conferencing-cell/src/services/settings.rs
use tokio::sync::RwLock;
use tracing::{debug, info};

use shared_models::error::FieldError;
use shared_utils::validation::is_valid_email;

use crate::models::{VideoConferencingError, ZoomSettings, ZoomSettingsUpdate, ZOOM_SETTINGS_ID};

/// Holds the single Zoom settings record. Created on first save, merged afterwards.
#[derive(Default)]
pub struct ZoomSettingsStore {
    settings: RwLock<Option<ZoomSettings>>,
}

impl ZoomSettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self) -> Option<ZoomSettings> {
        self.settings.read().await.clone()
    }

    pub async fn save(
        &self,
        update: ZoomSettingsUpdate,
    ) -> Result<ZoomSettings, VideoConferencingError> {
        validate_update(&update)?;

        let mut guard = self.settings.write().await;

        let saved = match guard.take() {
            Some(mut existing) => {
                debug!("Updating existing Zoom settings");
                if update.api_key.is_some() {
                    existing.api_key = update.api_key;
                }
                if update.api_secret.is_some() {
                    existing.api_secret = update.api_secret;
                }
                if update.zoom_email.is_some() {
                    existing.zoom_email = update.zoom_email;
                }
                existing
            }
            None => {
                info!("Creating Zoom settings");
                ZoomSettings {
                    id: ZOOM_SETTINGS_ID,
                    api_key: update.api_key,
                    api_secret: update.api_secret,
                    zoom_email: update.zoom_email,
                }
            }
        };

        *guard = Some(saved.clone());
        Ok(saved)
    }
}

fn validate_update(update: &ZoomSettingsUpdate) -> Result<(), VideoConferencingError> {
    let mut errors = Vec::new();

    if let Some(email) = update.zoom_email.as_deref() {
        if !email.is_empty() && !is_valid_email(email) {
            errors.push(FieldError::new("zoomEmail", "Invalid email"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(VideoConferencingError::InvalidSettings(errors))
    }
}
