// libs/video-conferencing-cell/src/router.rs
use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use shared_config::AppConfig;
use shared_utils::extractor::require_admin;

use crate::handlers::{get_zoom_settings, save_zoom_settings};
use crate::services::ZoomSettingsStore;

/// Zoom settings hold credentials, so every route sits behind the admin gate.
pub fn zoom_settings_routes(config: Arc<AppConfig>, store: Arc<ZoomSettingsStore>) -> Router {
    Router::new()
        .route("/", get(get_zoom_settings).post(save_zoom_settings))
        .layer(middleware::from_fn_with_state(config, require_admin))
        .with_state(store)
}
