// libs/availability-cell/src/router.rs
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::require_admin;

use crate::handlers;
use crate::services::store::AvailabilityStore;

pub fn availability_routes(config: Arc<AppConfig>, store: Arc<AvailabilityStore>) -> Router {
    let public_routes = Router::new()
        .route("/", get(handlers::get_availability))
        .route("/{day}", get(handlers::get_availability_by_day));

    // Editing the schedule is a dashboard operation
    let admin_routes = Router::new()
        .route("/", post(handlers::create_availability))
        .route("/{day}", post(handlers::create_availability_for_day))
        .route(
            "/rules/{rule_id}",
            patch(handlers::update_availability).delete(handlers::delete_availability),
        )
        .layer(middleware::from_fn_with_state(config, require_admin));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .with_state(store)
}
