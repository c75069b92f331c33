// libs/video-conferencing-cell/src/services/mod.rs

pub mod provisioner;
pub mod settings;

pub use provisioner::{
    fallback_meeting, provision_or_fallback, MeetingProvisioner, SimulatedZoomProvisioner,
};
pub use settings::ZoomSettingsStore;
