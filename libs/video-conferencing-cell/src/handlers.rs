// libs/video-conferencing-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use shared_models::error::{AppError, FieldError};

use crate::models::ZoomSettingsUpdate;
use crate::services::ZoomSettingsStore;

pub async fn get_zoom_settings(
    State(store): State<Arc<ZoomSettingsStore>>,
) -> Result<Json<Value>, AppError> {
    let settings = match store.get().await {
        Some(settings) => json!(settings),
        None => json!({}),
    };

    Ok(Json(settings))
}

pub async fn save_zoom_settings(
    State(store): State<Arc<ZoomSettingsStore>>,
    payload: Result<Json<ZoomSettingsUpdate>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(update) = payload.map_err(|rejection| {
        AppError::validation(
            "Invalid Zoom settings data",
            vec![FieldError::new("body", rejection.body_text())],
        )
    })?;

    let settings = store.save(update).await?;
    info!("Zoom settings saved");

    Ok(Json(json!(settings)))
}
