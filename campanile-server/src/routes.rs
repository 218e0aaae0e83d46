use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;

use crate::controllers;
use crate::{health_with_pool, AppState};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|Extension(state): Extension<Arc<AppState>>| async move {
            health_with_pool(&state.pool).await
        }))
        .route("/api/notifications", post(controllers::create_notification))
        .route("/api/notifications/user/:user_id", get(controllers::list_user_notifications))
        .layer(Extension(state))
}
