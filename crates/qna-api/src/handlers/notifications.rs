//! Notification handlers
//!
//! Endpoints for a user's notification inbox.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use qna_service::{NotificationListResponse, NotificationService};
use serde::Deserialize;

use crate::extractors::{parse_id, AuthUser, Page};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Extra query parameters for the notification listing
#[derive(Debug, Deserialize)]
pub struct NotificationFilter {
    /// When true, only unread notifications are returned
    #[serde(default)]
    pub unread: bool,
}

/// List the current user's notifications, newest first
///
/// GET /notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
    page: Page,
    Query(filter): Query<NotificationFilter>,
) -> ApiResult<Json<NotificationListResponse>> {
    let service = NotificationService::new(state.service_context());
    let response = service
        .list_notifications(auth.user_id, filter.unread, page.page, page.limit)
        .await?;
    Ok(Json(response))
}

/// Mark one notification as read
///
/// PUT /notifications/{notification_id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(notification_id): Path<String>,
) -> ApiResult<NoContent> {
    let notification_id = parse_id(&notification_id, "Notification")?;

    let service = NotificationService::new(state.service_context());
    service.mark_read(notification_id, auth.user_id).await?;
    Ok(NoContent)
}

/// Mark all of the current user's notifications as read
///
/// PUT /notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<serde_json::Value>> {
    let service = NotificationService::new(state.service_context());
    let updated = service.mark_all_read(auth.user_id).await?;
    Ok(Json(serde_json::json!({ "updated": updated })))
}

/// Delete a notification
///
/// DELETE /notifications/{notification_id}
pub async fn delete_notification(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(notification_id): Path<String>,
) -> ApiResult<NoContent> {
    let notification_id = parse_id(&notification_id, "Notification")?;

    let service = NotificationService::new(state.service_context());
    service
        .delete_notification(notification_id, auth.user_id)
        .await?;
    Ok(NoContent)
}
