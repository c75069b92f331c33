// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::require_admin;

use crate::handlers;
use crate::services::booking::AppointmentBookingService;

pub fn appointment_routes(
    config: Arc<AppConfig>,
    service: Arc<AppointmentBookingService>,
) -> Router {
    // Patients book and look up their own appointment without signing in
    let public_routes = Router::new()
        .route("/", post(handlers::create_appointment))
        .route("/available-times", get(handlers::get_available_times))
        .route("/{appointment_id}", get(handlers::get_appointment));

    // Dashboard operations
    let admin_routes = Router::new()
        .route("/", get(handlers::list_appointments))
        .route(
            "/{appointment_id}",
            patch(handlers::update_appointment).delete(handlers::delete_appointment),
        )
        .layer(middleware::from_fn_with_state(config, require_admin));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .with_state(service)
}

pub fn questionnaire_routes() -> Router {
    Router::new().route("/", post(handlers::validate_questionnaire_handler))
}
