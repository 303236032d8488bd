//! Question database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for questions table
#[derive(Debug, Clone, FromRow)]
pub struct QuestionModel {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub views: i64,
    pub active: bool,
    pub closed: bool,
    pub accepted_answer_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl QuestionModel {
    /// Check if question has an accepted answer
    #[inline]
    pub fn has_accepted_answer(&self) -> bool {
        self.accepted_answer_id.is_some()
    }
}
