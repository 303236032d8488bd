//! Question entity - a tagged post that collects answers

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Minimum number of tags on a question
pub const MIN_TAGS: usize = 1;
/// Maximum number of tags on a question
pub const MAX_TAGS: usize = 5;
/// Maximum length of a single tag token
pub const MAX_TAG_LEN: usize = 30;

/// Question entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: Snowflake,
    pub author_id: Snowflake,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub views: i64,
    /// Soft-delete marker; inactive questions are invisible to listings
    pub active: bool,
    pub closed: bool,
    pub accepted_answer_id: Option<Snowflake>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Question {
    /// Create a new open, active Question
    pub fn new(
        id: Snowflake,
        author_id: Snowflake,
        title: String,
        description: String,
        tags: Vec<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            author_id,
            title,
            description,
            tags,
            views: 0,
            active: true,
            closed: false,
            accepted_answer_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if an answer has been accepted
    #[inline]
    pub fn has_accepted_answer(&self) -> bool {
        self.accepted_answer_id.is_some()
    }

    /// Check whether the given user authored this question
    #[inline]
    pub fn is_author(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }

    /// Close the question to new answers and acceptance
    pub fn close(&mut self) {
        self.closed = true;
        self.updated_at = Utc::now();
    }
}

/// Validate a tag set: 1-5 non-empty lowercase tokens, each at most 30 chars.
///
/// Returns the offending reason on failure.
pub fn validate_tags(tags: &[String]) -> Result<(), String> {
    if tags.len() < MIN_TAGS || tags.len() > MAX_TAGS {
        return Err(format!("must supply {MIN_TAGS}-{MAX_TAGS} tags"));
    }
    for tag in tags {
        if tag.is_empty() || tag.len() > MAX_TAG_LEN {
            return Err(format!("each tag must be 1-{MAX_TAG_LEN} characters"));
        }
        if tag.chars().any(|c| c.is_uppercase() || c.is_whitespace()) {
            return Err("tags must be lowercase tokens without whitespace".to_string());
        }
    }
    Ok(())
}
