//! Answer database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for answers table
#[derive(Debug, Clone, FromRow)]
pub struct AnswerModel {
    pub id: i64,
    pub question_id: i64,
    pub author_id: i64,
    pub content: String,
    pub active: bool,
    pub accepted: bool,
    pub accepted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
