//! Notification entity <-> model mapper

use qna_core::entities::{Notification, NotificationKind};
use qna_core::value_objects::Snowflake;

use crate::models::NotificationModel;

/// Convert NotificationModel to Notification entity
impl From<NotificationModel> for Notification {
    fn from(model: NotificationModel) -> Self {
        Notification {
            id: Snowflake::new(model.id),
            recipient_id: Snowflake::new(model.recipient_id),
            sender_id: Snowflake::new(model.sender_id),
            // The column is constrained to the known kinds
            kind: NotificationKind::parse(&model.kind).unwrap_or(NotificationKind::Answer),
            message: model.message,
            question_id: model.question_id.map(Snowflake::new),
            answer_id: model.answer_id.map(Snowflake::new),
            read: model.read,
            read_at: model.read_at,
            created_at: model.created_at,
        }
    }
}
