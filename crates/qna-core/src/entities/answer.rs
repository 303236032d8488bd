//! Answer entity - a response attached to a question

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Answer entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub id: Snowflake,
    pub question_id: Snowflake,
    pub author_id: Snowflake,
    pub content: String,
    /// Soft-delete marker; inactive answers drop out of the parent's list
    pub active: bool,
    pub accepted: bool,
    pub accepted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Answer {
    /// Create a new active, unaccepted Answer
    pub fn new(id: Snowflake, question_id: Snowflake, author_id: Snowflake, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            question_id,
            author_id,
            content,
            active: true,
            accepted: false,
            accepted_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether the given user authored this answer
    #[inline]
    pub fn is_author(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }
}
