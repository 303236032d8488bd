//! PostgreSQL implementation of AnswerRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use qna_core::entities::Answer;
use qna_core::traits::{AnswerRepository, RepoResult};
use qna_core::value_objects::Snowflake;

use crate::models::AnswerModel;

use super::error::{answer_not_found, map_db_error};

/// PostgreSQL implementation of AnswerRepository
#[derive(Clone)]
pub struct PgAnswerRepository {
    pool: PgPool,
}

impl PgAnswerRepository {
    /// Create a new PgAnswerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnswerRepository for PgAnswerRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Answer>> {
        // Soft-deleted answers stay fetchable by id for historical integrity
        let result = sqlx::query_as::<_, AnswerModel>(
            r"
            SELECT id, question_id, author_id, content, active, accepted, accepted_at,
                   created_at, updated_at
            FROM answers
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Answer::from))
    }

    #[instrument(skip(self))]
    async fn find_by_question(&self, question_id: Snowflake) -> RepoResult<Vec<Answer>> {
        let results = sqlx::query_as::<_, AnswerModel>(
            r"
            SELECT id, question_id, author_id, content, active, accepted, accepted_at,
                   created_at, updated_at
            FROM answers
            WHERE question_id = $1 AND active = TRUE
            ORDER BY id ASC
            ",
        )
        .bind(question_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Answer::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, answer: &Answer) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO answers (id, question_id, author_id, content, active, accepted,
                                 accepted_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(answer.id.into_inner())
        .bind(answer.question_id.into_inner())
        .bind(answer.author_id.into_inner())
        .bind(&answer.content)
        .bind(answer.active)
        .bind(answer.accepted)
        .bind(answer.accepted_at)
        .bind(answer.created_at)
        .bind(answer.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE answers
            SET active = FALSE, updated_at = NOW()
            WHERE id = $1 AND active = TRUE
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(answer_not_found());
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn mark_accepted(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE answers
            SET accepted = TRUE, accepted_at = NOW(), updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(answer_not_found());
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn clear_accepted(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE answers
            SET accepted = FALSE, accepted_at = NULL, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(answer_not_found());
        }

        Ok(())
    }
}
