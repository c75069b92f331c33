use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use appointment_cell::{
    appointment_routes, questionnaire_routes, AppointmentBookingService, AppointmentStore,
    LoggingNotifier,
};
use auth_cell::admin_routes;
use availability_cell::{availability_routes, AvailabilityStore};
use shared_config::AppConfig;
use users_cell::{user_routes, UserStore};
use video_conferencing_cell::{zoom_settings_routes, SimulatedZoomProvisioner, ZoomSettingsStore};

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Build every store and collaborator, then mount the cells under `/api`.
/// State lives as long as the returned router.
pub fn create_router(config: Arc<AppConfig>) -> Router {
    let zoom_settings = Arc::new(ZoomSettingsStore::new());
    let provisioner = Arc::new(SimulatedZoomProvisioner::new(
        config.meeting_base_url.clone(),
        Arc::clone(&zoom_settings),
    ));

    let booking = Arc::new(AppointmentBookingService::new(
        Arc::clone(&config),
        Arc::new(AppointmentStore::new()),
        provisioner,
        Arc::new(LoggingNotifier),
    ));
    let availability = Arc::new(AvailabilityStore::with_default_hours());

    let api = Router::new()
        .route("/health", get(health))
        .nest("/appointments", appointment_routes(Arc::clone(&config), booking))
        .nest("/availability", availability_routes(Arc::clone(&config), availability))
        .nest("/zoom-settings", zoom_settings_routes(Arc::clone(&config), zoom_settings))
        .nest("/validate-questionnaire", questionnaire_routes())
        .nest("/users", user_routes(Arc::new(UserStore::new())))
        .nest("/admin", admin_routes(config));

    Router::new().nest("/api", api)
}
