//! Vote service
//!
//! Implements the vote toggle state machine over the vote ledger.

use qna_core::entities::Vote;
use qna_core::{DomainError, Snowflake, VoteType};
use tracing::{info, instrument};

use crate::dto::VoteResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// What kind of content a vote lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteTarget {
    Question,
    Answer,
}

/// Vote service
pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    /// Create a new VoteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply a vote to a question or answer
    ///
    /// Toggle semantics: casting the same direction twice retracts the vote;
    /// casting the opposite direction switches it in a single step. The
    /// primary key on (content_id, voter_id) keeps a voter in at most one
    /// direction at a time.
    #[instrument(skip(self))]
    pub async fn apply_vote(
        &self,
        target: VoteTarget,
        content_id: Snowflake,
        voter_id: Snowflake,
        vote_type: VoteType,
    ) -> ServiceResult<VoteResponse> {
        let author_id = self.resolve_author(target, content_id).await?;

        if author_id == voter_id {
            return Err(DomainError::SelfVote.into());
        }

        let existing = self.ctx.vote_repo().find(content_id, voter_id).await?;

        let your_vote = match existing {
            Some(vote) if vote.vote_type == vote_type => {
                // Same direction twice retracts
                self.ctx.vote_repo().delete(content_id, voter_id).await?;
                None
            }
            Some(_) => {
                // Opposite direction switches in one step
                self.ctx
                    .vote_repo()
                    .update_type(content_id, voter_id, vote_type)
                    .await?;
                Some(vote_type)
            }
            None => {
                let vote = Vote::new(content_id, voter_id, vote_type);
                self.ctx.vote_repo().create(&vote).await?;
                Some(vote_type)
            }
        };

        info!(
            content_id = %content_id,
            voter_id = %voter_id,
            vote = ?your_vote,
            "Vote applied"
        );

        let tally = self.ctx.vote_repo().tally(content_id).await?;

        Ok(VoteResponse {
            content_id: content_id.to_string(),
            upvotes: tally.upvotes,
            downvotes: tally.downvotes,
            vote_score: tally.score(),
            your_vote: your_vote.map(|v| v.as_str().to_string()),
        })
    }

    /// Resolve the content's author, verifying the content exists and is active
    async fn resolve_author(
        &self,
        target: VoteTarget,
        content_id: Snowflake,
    ) -> ServiceResult<Snowflake> {
        match target {
            VoteTarget::Question => self
                .ctx
                .question_repo()
                .find_by_id(content_id)
                .await?
                .filter(|q| q.active)
                .map(|q| q.author_id)
                .ok_or_else(|| ServiceError::not_found("Question", content_id.to_string())),
            VoteTarget::Answer => self
                .ctx
                .answer_repo()
                .find_by_id(content_id)
                .await?
                .filter(|a| a.active)
                .map(|a| a.author_id)
                .ok_or_else(|| ServiceError::not_found("Answer", content_id.to_string())),
        }
    }
}
