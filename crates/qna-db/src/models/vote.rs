//! Vote database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for votes table
///
/// Primary key is (content_id, voter_id): a voter holds at most one
/// vote per content item, in either direction.
#[derive(Debug, Clone, FromRow)]
pub struct VoteModel {
    pub content_id: i64,
    pub voter_id: i64,
    pub vote_type: String,
    pub created_at: DateTime<Utc>,
}

/// Aggregated vote tally for one content item (from query)
#[derive(Debug, Clone, FromRow)]
pub struct VoteTallyModel {
    pub content_id: i64,
    pub upvotes: i64,
    pub downvotes: i64,
}
