//! Notification entity - fan-out side effect of content events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::Snowflake;

/// Notification kind - closed set; `Comment`, `Mention` and `Vote` are
/// reserved slots not yet populated by any trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Answer,
    Comment,
    Mention,
    Vote,
    AcceptedAnswer,
}

impl NotificationKind {
    /// Stable string form used in the database
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Answer => "answer",
            Self::Comment => "comment",
            Self::Mention => "mention",
            Self::Vote => "vote",
            Self::AcceptedAnswer => "accepted_answer",
        }
    }

    /// Parse from the database string form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "answer" => Some(Self::Answer),
            "comment" => Some(Self::Comment),
            "mention" => Some(Self::Mention),
            "vote" => Some(Self::Vote),
            "accepted_answer" => Some(Self::AcceptedAnswer),
            _ => None,
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notification entity
///
/// Immutable after creation except for the read flag; deleted explicitly by
/// the recipient or left to accumulate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Snowflake,
    pub recipient_id: Snowflake,
    pub sender_id: Snowflake,
    pub kind: NotificationKind,
    pub message: String,
    pub question_id: Option<Snowflake>,
    pub answer_id: Option<Snowflake>,
    pub read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Create a new unread Notification
    pub fn new(
        id: Snowflake,
        recipient_id: Snowflake,
        sender_id: Snowflake,
        kind: NotificationKind,
        message: String,
    ) -> Self {
        Self {
            id,
            recipient_id,
            sender_id,
            kind,
            message,
            question_id: None,
            answer_id: None,
            read: false,
            read_at: None,
            created_at: Utc::now(),
        }
    }

    /// Attach the related question/answer references
    pub fn with_refs(mut self, question_id: Option<Snowflake>, answer_id: Option<Snowflake>) -> Self {
        self.question_id = question_id;
        self.answer_id = answer_id;
        self
    }
}
