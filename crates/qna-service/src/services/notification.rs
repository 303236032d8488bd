//! Notification service
//!
//! Listing, read tracking, and deletion of a recipient's notifications.

use qna_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{NotificationListResponse, NotificationResponse, PaginationMeta};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Notification service
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    /// Create a new NotificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List a recipient's notifications, newest first
    #[instrument(skip(self))]
    pub async fn list_notifications(
        &self,
        recipient_id: Snowflake,
        unread_only: bool,
        page: i64,
        limit: i64,
    ) -> ServiceResult<NotificationListResponse> {
        let offset = (page - 1) * limit;

        let notifications = self
            .ctx
            .notification_repo()
            .find_by_recipient(recipient_id, unread_only, limit, offset)
            .await?;

        let total = self
            .ctx
            .notification_repo()
            .count_by_recipient(recipient_id, unread_only)
            .await?;

        let unread_count = self
            .ctx
            .notification_repo()
            .count_by_recipient(recipient_id, true)
            .await?;

        let data: Vec<NotificationResponse> =
            notifications.iter().map(NotificationResponse::from).collect();

        Ok(NotificationListResponse {
            data,
            unread_count,
            pagination: PaginationMeta::new(page, limit, total),
        })
    }

    /// Mark one notification as read (recipient only)
    #[instrument(skip(self))]
    pub async fn mark_read(
        &self,
        notification_id: Snowflake,
        recipient_id: Snowflake,
    ) -> ServiceResult<()> {
        self.find_owned(notification_id, recipient_id).await?;
        self.ctx.notification_repo().mark_read(notification_id).await?;
        Ok(())
    }

    /// Mark all of a recipient's notifications as read
    #[instrument(skip(self))]
    pub async fn mark_all_read(&self, recipient_id: Snowflake) -> ServiceResult<u64> {
        let updated = self
            .ctx
            .notification_repo()
            .mark_all_read(recipient_id)
            .await?;

        info!(recipient_id = %recipient_id, updated, "Notifications marked read");

        Ok(updated)
    }

    /// Delete a notification (recipient only)
    #[instrument(skip(self))]
    pub async fn delete_notification(
        &self,
        notification_id: Snowflake,
        recipient_id: Snowflake,
    ) -> ServiceResult<()> {
        self.find_owned(notification_id, recipient_id).await?;
        self.ctx.notification_repo().delete(notification_id).await?;
        Ok(())
    }

    /// Look up a notification, hiding other recipients' rows behind a 404
    async fn find_owned(
        &self,
        notification_id: Snowflake,
        recipient_id: Snowflake,
    ) -> ServiceResult<()> {
        self.ctx
            .notification_repo()
            .find_by_id(notification_id)
            .await?
            .filter(|n| n.recipient_id == recipient_id)
            .map(|_| ())
            .ok_or_else(|| ServiceError::not_found("Notification", notification_id.to_string()))
    }
}
