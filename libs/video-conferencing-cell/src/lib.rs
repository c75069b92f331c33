// libs/video-conferencing-cell/src/lib.rs
//! # Video Conferencing Cell
//!
//! Meeting links for telehealth appointments and the Zoom integration
//! settings managed from the admin dashboard.
//!
//! ```text
//! +-----------------------------------------------------+
//! |                   Video Cell                        |
//! +-----------------------------------------------------+
//! |  handlers.rs     |  zoom-settings endpoints         |
//! |  router.rs       |  Route definitions               |
//! |  models.rs       |  Meeting + settings DTOs         |
//! |  services/       |                                  |
//! |    provisioner.rs|  MeetingProvisioner + fallback   |
//! |    settings.rs   |  Zoom settings singleton store   |
//! +-----------------------------------------------------+
//! ```
//!
//! ## API Endpoints
//! - `GET /zoom-settings` - Current settings, or `{}` before the first save
//! - `POST /zoom-settings` - Create or merge the settings record
//!
//! Meeting creation has no endpoint of its own; the appointment cell calls a
//! [`MeetingProvisioner`] while booking and falls back to
//! [`fallback_meeting`] when it fails.

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{
    MeetingDetails, MeetingRequest, VideoConferencingError, ZoomSettings, ZoomSettingsUpdate,
};

pub use services::{
    fallback_meeting, provision_or_fallback, MeetingProvisioner, SimulatedZoomProvisioner,
    ZoomSettingsStore,
};

pub use router::zoom_settings_routes;
