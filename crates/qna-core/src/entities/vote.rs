//! Vote entity - one row of a content item's vote ledger

use chrono::{DateTime, Utc};

use crate::value_objects::{Snowflake, VoteType};

/// A single vote by one user on one content item (question or answer).
///
/// The ledger is keyed by (content_id, voter_id), so a voter holds at most
/// one vote per content item at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub content_id: Snowflake,
    pub voter_id: Snowflake,
    pub vote_type: VoteType,
    pub created_at: DateTime<Utc>,
}

impl Vote {
    /// Create a new Vote stamped with the current time
    pub fn new(content_id: Snowflake, voter_id: Snowflake, vote_type: VoteType) -> Self {
        Self {
            content_id,
            voter_id,
            vote_type,
            created_at: Utc::now(),
        }
    }
}

/// Aggregated tally for a content item, derived from the ledger on read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoteTally {
    pub upvotes: i64,
    pub downvotes: i64,
}

impl VoteTally {
    /// Score = |upvoters| - |downvoters|, never stored
    #[inline]
    pub fn score(&self) -> i64 {
        self.upvotes - self.downvotes
    }
}
