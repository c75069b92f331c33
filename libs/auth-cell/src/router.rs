use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn admin_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/login", post(handlers::admin_login))
        .route("/session", get(handlers::admin_session))
        .with_state(state)
}
