//! PostgreSQL implementation of VoteRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use qna_core::entities::{Vote, VoteTally};
use qna_core::traits::{RepoResult, VoteRepository};
use qna_core::value_objects::{Snowflake, VoteType};

use crate::models::{VoteModel, VoteTallyModel};

use super::error::map_db_error;

/// PostgreSQL implementation of VoteRepository
#[derive(Clone)]
pub struct PgVoteRepository {
    pool: PgPool,
}

impl PgVoteRepository {
    /// Create a new PgVoteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteRepository for PgVoteRepository {
    #[instrument(skip(self))]
    async fn find(&self, content_id: Snowflake, voter_id: Snowflake) -> RepoResult<Option<Vote>> {
        let result = sqlx::query_as::<_, VoteModel>(
            r"
            SELECT content_id, voter_id, vote_type, created_at
            FROM votes
            WHERE content_id = $1 AND voter_id = $2
            ",
        )
        .bind(content_id.into_inner())
        .bind(voter_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Vote::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, vote: &Vote) -> RepoResult<()> {
        // The primary key on (content_id, voter_id) enforces one vote
        // per voter per content item
        sqlx::query(
            r"
            INSERT INTO votes (content_id, voter_id, vote_type, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (content_id, voter_id) DO UPDATE SET vote_type = EXCLUDED.vote_type
            ",
        )
        .bind(vote.content_id.into_inner())
        .bind(vote.voter_id.into_inner())
        .bind(vote.vote_type.as_str())
        .bind(vote.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_type(
        &self,
        content_id: Snowflake,
        voter_id: Snowflake,
        vote_type: VoteType,
    ) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE votes SET vote_type = $3
            WHERE content_id = $1 AND voter_id = $2
            ",
        )
        .bind(content_id.into_inner())
        .bind(voter_id.into_inner())
        .bind(vote_type.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, content_id: Snowflake, voter_id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            r"
            DELETE FROM votes WHERE content_id = $1 AND voter_id = $2
            ",
        )
        .bind(content_id.into_inner())
        .bind(voter_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn tally(&self, content_id: Snowflake) -> RepoResult<VoteTally> {
        let (upvotes, downvotes) = sqlx::query_as::<_, (i64, i64)>(
            r"
            SELECT COUNT(*) FILTER (WHERE vote_type = 'up'),
                   COUNT(*) FILTER (WHERE vote_type = 'down')
            FROM votes
            WHERE content_id = $1
            ",
        )
        .bind(content_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(VoteTally { upvotes, downvotes })
    }

    #[instrument(skip(self))]
    async fn tally_many(&self, content_ids: &[Snowflake]) -> RepoResult<Vec<(Snowflake, VoteTally)>> {
        if content_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = content_ids.iter().map(|s| s.into_inner()).collect();

        let results = sqlx::query_as::<_, VoteTallyModel>(
            r"
            SELECT content_id,
                   COUNT(*) FILTER (WHERE vote_type = 'up') AS upvotes,
                   COUNT(*) FILTER (WHERE vote_type = 'down') AS downvotes
            FROM votes
            WHERE content_id = ANY($1)
            GROUP BY content_id
            ",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .map(|m| (Snowflake::new(m.content_id), VoteTally::from(m)))
            .collect())
    }
}
