// libs/users-cell/src/router.rs
use std::sync::Arc;

use axum::{routing::post, Router};

use crate::handlers;
use crate::services::store::UserStore;

pub fn user_routes(store: Arc<UserStore>) -> Router {
    Router::new()
        .route("/", post(handlers::create_user))
        .with_state(store)
}
