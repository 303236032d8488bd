//! Vote entity <-> model mapper

use qna_core::entities::{Vote, VoteTally};
use qna_core::value_objects::{Snowflake, VoteType};

use crate::models::{VoteModel, VoteTallyModel};

/// Convert VoteModel to Vote entity
impl From<VoteModel> for Vote {
    fn from(model: VoteModel) -> Self {
        Vote {
            content_id: Snowflake::new(model.content_id),
            voter_id: Snowflake::new(model.voter_id),
            // The column is constrained to 'up'/'down'
            vote_type: VoteType::parse(&model.vote_type).unwrap_or(VoteType::Up),
            created_at: model.created_at,
        }
    }
}

/// Convert VoteTallyModel to VoteTally value
impl From<VoteTallyModel> for VoteTally {
    fn from(model: VoteTallyModel) -> Self {
        VoteTally {
            upvotes: model.upvotes,
            downvotes: model.downvotes,
        }
    }
}
