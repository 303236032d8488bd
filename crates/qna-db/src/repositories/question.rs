//! PostgreSQL implementation of QuestionRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use qna_core::entities::Question;
use qna_core::traits::{QuestionQuery, QuestionRepository, QuestionSort, RepoResult};
use qna_core::value_objects::Snowflake;

use crate::models::QuestionModel;

use super::error::{map_db_error, question_not_found};

const QUESTION_COLUMNS: &str = "q.id, q.author_id, q.title, q.description, q.tags, q.views, \
     q.active, q.closed, q.accepted_answer_id, q.created_at, q.updated_at";

/// PostgreSQL implementation of QuestionRepository
#[derive(Clone)]
pub struct PgQuestionRepository {
    pool: PgPool,
}

impl PgQuestionRepository {
    /// Create a new PgQuestionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Append the tag and search filters shared by the list and count queries
fn push_filters<'a>(builder: &mut QueryBuilder<'a, Postgres>, query: &'a QuestionQuery) {
    if let Some(tags) = &query.tags {
        // Union semantics: any overlapping tag qualifies
        builder.push(" AND q.tags && ");
        builder.push_bind(tags);
    }

    if let Some(search) = &query.search {
        builder.push(" AND to_tsvector('english', q.title || ' ' || q.description) @@ plainto_tsquery('english', ");
        builder.push_bind(search);
        builder.push(")");
    }
}

#[async_trait]
impl QuestionRepository for PgQuestionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Question>> {
        let result = sqlx::query_as::<_, QuestionModel>(
            r"
            SELECT q.id, q.author_id, q.title, q.description, q.tags, q.views,
                   q.active, q.closed, q.accepted_answer_id, q.created_at, q.updated_at
            FROM questions q
            WHERE q.id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Question::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &QuestionQuery) -> RepoResult<(Vec<Question>, i64)> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {QUESTION_COLUMNS} FROM questions q"));

        if query.sort == QuestionSort::Votes {
            // Ordering by raw upvote count, with the downvote count as an
            // ascending tie-break. Intentionally not net score.
            builder.push(
                " LEFT JOIN (
                    SELECT content_id,
                           COUNT(*) FILTER (WHERE vote_type = 'up') AS upvotes,
                           COUNT(*) FILTER (WHERE vote_type = 'down') AS downvotes
                    FROM votes
                    GROUP BY content_id
                ) v ON v.content_id = q.id",
            );
        }

        builder.push(" WHERE q.active = TRUE");
        push_filters(&mut builder, query);

        match query.sort {
            QuestionSort::Newest => builder.push(" ORDER BY q.id DESC"),
            QuestionSort::Oldest => builder.push(" ORDER BY q.id ASC"),
            QuestionSort::Views => builder.push(" ORDER BY q.views DESC, q.id DESC"),
            QuestionSort::Votes => builder.push(
                " ORDER BY COALESCE(v.upvotes, 0) DESC, COALESCE(v.downvotes, 0) ASC, q.id DESC",
            ),
        };

        builder.push(" LIMIT ");
        builder.push_bind(query.limit);
        builder.push(" OFFSET ");
        builder.push_bind(query.offset);

        let results = builder
            .build_query_as::<QuestionModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM questions q WHERE q.active = TRUE");
        push_filters(&mut count_builder, query);

        let total = count_builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok((results.into_iter().map(Question::from).collect(), total))
    }

    #[instrument(skip(self))]
    async fn create(&self, question: &Question) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO questions (id, author_id, title, description, tags, views, active,
                                   closed, accepted_answer_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(question.id.into_inner())
        .bind(question.author_id.into_inner())
        .bind(&question.title)
        .bind(&question.description)
        .bind(&question.tags)
        .bind(question.views)
        .bind(question.active)
        .bind(question.closed)
        .bind(question.accepted_answer_id.map(Snowflake::into_inner))
        .bind(question.created_at)
        .bind(question.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, question: &Question) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE questions
            SET title = $2, description = $3, tags = $4, closed = $5, updated_at = NOW()
            WHERE id = $1 AND active = TRUE
            ",
        )
        .bind(question.id.into_inner())
        .bind(&question.title)
        .bind(&question.description)
        .bind(&question.tags)
        .bind(question.closed)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(question_not_found());
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE questions
            SET active = FALSE, updated_at = NOW()
            WHERE id = $1 AND active = TRUE
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(question_not_found());
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn increment_views(&self, id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE questions SET views = views + 1 WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_accepted_answer(
        &self,
        question_id: Snowflake,
        answer_id: Option<Snowflake>,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE questions
            SET accepted_answer_id = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(question_id.into_inner())
        .bind(answer_id.map(Snowflake::into_inner))
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(question_not_found());
        }

        Ok(())
    }
}
