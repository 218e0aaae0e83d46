use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use campanile_core::{
    CreateNotificationRequest, CreateNotificationResponse, ErrorBody, ListNotificationsResponse,
};
use std::sync::Arc;

use crate::service::{parse_user_id_param, NotificationService, ServiceError};
use crate::AppState;

type ApiError = (StatusCode, Json<ErrorBody>);

/// Handler per POST /api/notifications
///
/// 201 con il record creato; 400 con il motivo quando la validazione fallisce;
/// 500 con messaggio generico quando lo store fallisce (il dettaglio resta nei log).
pub async fn create_notification(
    Extension(state): Extension<Arc<AppState>>,
    Json(req): Json<CreateNotificationRequest>,
) -> Result<(StatusCode, Json<CreateNotificationResponse>), ApiError> {
    let service = NotificationService::new(state.pool.clone());
    let notification = service.create(req).await.map_err(|e| match e {
        ServiceError::Validation(msg) => (StatusCode::BAD_REQUEST, Json(ErrorBody::new(msg))),
        ServiceError::Store(err) => {
            tracing::error!(error = %err, "create notification failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new("Failed to create notification")),
            )
        }
    })?;

    tracing::info!(id = notification.id, user_id = notification.user_id, "notification created");
    Ok((
        StatusCode::CREATED,
        Json(CreateNotificationResponse { success: true, notification }),
    ))
}

/// Handler per GET /api/notifications/user/:user_id
///
/// 200 con la lista ordinata (più recenti per prime); la lista vuota è un 200,
/// non un errore. 400 quando lo userId del path non è un intero.
pub async fn list_user_notifications(
    Extension(state): Extension<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<(StatusCode, Json<ListNotificationsResponse>), ApiError> {
    let user_id = parse_user_id_param(&user_id)
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(ErrorBody::new(e.to_string()))))?;

    let service = NotificationService::new(state.pool.clone());
    let notifications = service.list_for_user(user_id).await.map_err(|e| match e {
        ServiceError::Validation(msg) => (StatusCode::BAD_REQUEST, Json(ErrorBody::new(msg))),
        ServiceError::Store(err) => {
            tracing::error!(error = %err, "list notifications failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new("Failed to fetch notifications")),
            )
        }
    })?;

    Ok((
        StatusCode::OK,
        Json(ListNotificationsResponse { success: true, notifications }),
    ))
}
