//! Question service
//!
//! Handles asking, fetching, listing, closing, and deleting questions.

use qna_core::entities::{validate_tags, Question, VoteTally};
use qna_core::traits::QuestionQuery;
use qna_core::{DomainError, Snowflake};
use std::collections::HashMap;
use tracing::{info, instrument};

use crate::dto::{
    AnswerResponse, CreateQuestionRequest, PaginatedResponse, QuestionDetailResponse,
    QuestionResponse, UpdateQuestionRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Question service
pub struct QuestionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> QuestionService<'a> {
    /// Create a new QuestionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Ask a new question
    #[instrument(skip(self, request), fields(author_id = %author_id))]
    pub async fn create_question(
        &self,
        author_id: Snowflake,
        request: CreateQuestionRequest,
    ) -> ServiceResult<QuestionResponse> {
        let tags = normalize_tags(request.tags);
        validate_tags(&tags).map_err(DomainError::InvalidTags)?;

        let question = Question::new(
            self.ctx.generate_id(),
            author_id,
            request.title,
            request.description,
            tags,
        );

        self.ctx.question_repo().create(&question).await?;

        info!(question_id = %question.id, "Question created");

        Ok(QuestionResponse::new(&question, &VoteTally::default()))
    }

    /// Get a question with its active answers and vote tallies
    ///
    /// Increments the view counter unless the requester is the author.
    /// Anonymous views always count.
    #[instrument(skip(self))]
    pub async fn get_question(
        &self,
        question_id: Snowflake,
        requester: Option<Snowflake>,
    ) -> ServiceResult<QuestionDetailResponse> {
        let mut question = self
            .ctx
            .question_repo()
            .find_by_id(question_id)
            .await?
            .filter(|q| q.active)
            .ok_or_else(|| ServiceError::not_found("Question", question_id.to_string()))?;

        if requester != Some(question.author_id) {
            self.ctx.question_repo().increment_views(question_id).await?;
            question.views += 1;
        }

        let answers = self.ctx.answer_repo().find_by_question(question_id).await?;

        // One tally query covers the question and all of its answers
        let mut ids: Vec<Snowflake> = Vec::with_capacity(answers.len() + 1);
        ids.push(question_id);
        ids.extend(answers.iter().map(|a| a.id));
        let tallies: HashMap<Snowflake, VoteTally> =
            self.ctx.vote_repo().tally_many(&ids).await?.into_iter().collect();

        let answer_responses = answers
            .iter()
            .map(|a| AnswerResponse::new(a, tallies.get(&a.id).unwrap_or(&VoteTally::default())))
            .collect();

        Ok(QuestionDetailResponse {
            question: QuestionResponse::new(
                &question,
                tallies.get(&question_id).unwrap_or(&VoteTally::default()),
            ),
            answers: answer_responses,
        })
    }

    /// List active questions with filtering, sorting, and pagination
    #[instrument(skip(self))]
    pub async fn list_questions(
        &self,
        query: QuestionQuery,
        page: i64,
    ) -> ServiceResult<PaginatedResponse<QuestionResponse>> {
        let (questions, total) = self.ctx.question_repo().list(&query).await?;

        let ids: Vec<Snowflake> = questions.iter().map(|q| q.id).collect();
        let tallies: HashMap<Snowflake, VoteTally> =
            self.ctx.vote_repo().tally_many(&ids).await?.into_iter().collect();

        let data = questions
            .iter()
            .map(|q| QuestionResponse::new(q, tallies.get(&q.id).unwrap_or(&VoteTally::default())))
            .collect();

        Ok(PaginatedResponse::new(data, page, query.limit, total))
    }

    /// Update a question (author only)
    #[instrument(skip(self, request))]
    pub async fn update_question(
        &self,
        question_id: Snowflake,
        actor: Snowflake,
        request: UpdateQuestionRequest,
    ) -> ServiceResult<QuestionResponse> {
        let mut question = self.find_active(question_id).await?;

        if !question.is_author(actor) {
            return Err(DomainError::NotQuestionAuthor.into());
        }

        if let Some(title) = request.title {
            question.title = title;
        }
        if let Some(description) = request.description {
            question.description = description;
        }
        if let Some(tags) = request.tags {
            let tags = normalize_tags(tags);
            validate_tags(&tags).map_err(DomainError::InvalidTags)?;
            question.tags = tags;
        }

        self.ctx.question_repo().update(&question).await?;

        info!(question_id = %question_id, "Question updated");

        let tally = self.ctx.vote_repo().tally(question_id).await?;
        Ok(QuestionResponse::new(&question, &tally))
    }

    /// Close a question (author or admin)
    #[instrument(skip(self))]
    pub async fn close_question(
        &self,
        question_id: Snowflake,
        actor: Snowflake,
    ) -> ServiceResult<()> {
        let mut question = self.find_active(question_id).await?;

        self.require_author_or_admin(&question, actor).await?;

        if question.closed {
            // Closing twice is a no-op
            return Ok(());
        }

        question.close();
        self.ctx.question_repo().update(&question).await?;

        info!(question_id = %question_id, "Question closed");

        Ok(())
    }

    /// Soft delete a question (author or admin)
    #[instrument(skip(self))]
    pub async fn delete_question(
        &self,
        question_id: Snowflake,
        actor: Snowflake,
    ) -> ServiceResult<()> {
        let question = self.find_active(question_id).await?;

        self.require_author_or_admin(&question, actor).await?;

        self.ctx.question_repo().soft_delete(question_id).await?;

        info!(question_id = %question_id, actor = %actor, "Question deleted");

        Ok(())
    }

    async fn find_active(&self, question_id: Snowflake) -> ServiceResult<Question> {
        self.ctx
            .question_repo()
            .find_by_id(question_id)
            .await?
            .filter(|q| q.active)
            .ok_or_else(|| ServiceError::not_found("Question", question_id.to_string()))
    }

    async fn require_author_or_admin(
        &self,
        question: &Question,
        actor: Snowflake,
    ) -> ServiceResult<()> {
        if question.is_author(actor) {
            return Ok(());
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_id(actor)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", actor.to_string()))?;

        if user.is_admin() {
            Ok(())
        } else {
            Err(DomainError::NotQuestionAuthor.into())
        }
    }
}

/// Lowercase and trim tags before validation
fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}
