//! Answer service
//!
//! Handles posting answers, the acceptance workflow, and deletion.

use qna_core::entities::{Answer, Notification, NotificationKind};
use qna_core::{DomainError, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{AnswerResponse, CreateAnswerRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Answer service
pub struct AnswerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AnswerService<'a> {
    /// Create a new AnswerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post an answer to a question
    ///
    /// Notifies the question author unless they answered their own question.
    #[instrument(skip(self, request), fields(author_id = %author_id))]
    pub async fn create_answer(
        &self,
        question_id: Snowflake,
        author_id: Snowflake,
        request: CreateAnswerRequest,
    ) -> ServiceResult<AnswerResponse> {
        let question = self
            .ctx
            .question_repo()
            .find_by_id(question_id)
            .await?
            .filter(|q| q.active)
            .ok_or_else(|| ServiceError::not_found("Question", question_id.to_string()))?;

        if question.closed {
            return Err(DomainError::QuestionClosed.into());
        }

        let answer = Answer::new(self.ctx.generate_id(), question_id, author_id, request.content);
        self.ctx.answer_repo().create(&answer).await?;

        info!(answer_id = %answer.id, question_id = %question_id, "Answer created");

        if question.author_id != author_id {
            self.notify(
                question.author_id,
                author_id,
                NotificationKind::Answer,
                "Your question received a new answer".to_string(),
                Some(question_id),
                Some(answer.id),
            )
            .await;
        }

        let tally = self.ctx.vote_repo().tally(answer.id).await?;
        Ok(AnswerResponse::new(&answer, &tally))
    }

    /// Get an answer by id (soft-deleted answers stay fetchable)
    #[instrument(skip(self))]
    pub async fn get_answer(&self, answer_id: Snowflake) -> ServiceResult<AnswerResponse> {
        let answer = self
            .ctx
            .answer_repo()
            .find_by_id(answer_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Answer", answer_id.to_string()))?;

        let tally = self.ctx.vote_repo().tally(answer_id).await?;
        Ok(AnswerResponse::new(&answer, &tally))
    }

    /// Accept an answer
    ///
    /// Only the question author may accept; the question must be open and
    /// the answer active. Accepting a second answer switches acceptance:
    /// the previous answer's flag is cleared first, then the new one is set,
    /// then the question's back-reference is updated. These are independent
    /// persists, not a transaction.
    #[instrument(skip(self))]
    pub async fn accept_answer(
        &self,
        answer_id: Snowflake,
        actor: Snowflake,
    ) -> ServiceResult<AnswerResponse> {
        let answer = self
            .ctx
            .answer_repo()
            .find_by_id(answer_id)
            .await?
            .filter(|a| a.active)
            .ok_or_else(|| ServiceError::not_found("Answer", answer_id.to_string()))?;

        let question = self
            .ctx
            .question_repo()
            .find_by_id(answer.question_id)
            .await?
            .filter(|q| q.active)
            .ok_or_else(|| ServiceError::not_found("Question", answer.question_id.to_string()))?;

        if !question.is_author(actor) {
            return Err(DomainError::NotQuestionAuthor.into());
        }

        if question.closed {
            return Err(DomainError::QuestionClosed.into());
        }

        // Re-accepting the current answer is a no-op, no duplicate notification
        if question.accepted_answer_id == Some(answer_id) {
            let tally = self.ctx.vote_repo().tally(answer_id).await?;
            return Ok(AnswerResponse::new(&answer, &tally));
        }

        // Clear the previously accepted answer, if any
        if let Some(previous_id) = question.accepted_answer_id {
            self.ctx.answer_repo().clear_accepted(previous_id).await?;
        }

        self.ctx.answer_repo().mark_accepted(answer_id).await?;
        self.ctx
            .question_repo()
            .set_accepted_answer(question.id, Some(answer_id))
            .await?;

        info!(
            answer_id = %answer_id,
            question_id = %question.id,
            "Answer accepted"
        );

        if answer.author_id != actor {
            self.notify(
                answer.author_id,
                actor,
                NotificationKind::AcceptedAnswer,
                "Your answer was accepted".to_string(),
                Some(question.id),
                Some(answer_id),
            )
            .await;
        }

        let accepted = self
            .ctx
            .answer_repo()
            .find_by_id(answer_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Answer", answer_id.to_string()))?;

        let tally = self.ctx.vote_repo().tally(answer_id).await?;
        Ok(AnswerResponse::new(&accepted, &tally))
    }

    /// Soft delete an answer (author or admin)
    ///
    /// A deleted accepted answer also clears the question's back-reference.
    #[instrument(skip(self))]
    pub async fn delete_answer(&self, answer_id: Snowflake, actor: Snowflake) -> ServiceResult<()> {
        let answer = self
            .ctx
            .answer_repo()
            .find_by_id(answer_id)
            .await?
            .filter(|a| a.active)
            .ok_or_else(|| ServiceError::not_found("Answer", answer_id.to_string()))?;

        if !answer.is_author(actor) {
            let user = self
                .ctx
                .user_repo()
                .find_by_id(actor)
                .await?
                .ok_or_else(|| ServiceError::not_found("User", actor.to_string()))?;
            if !user.is_admin() {
                return Err(DomainError::NotContentAuthor.into());
            }
        }

        self.ctx.answer_repo().soft_delete(answer_id).await?;

        if answer.accepted {
            self.ctx
                .question_repo()
                .set_accepted_answer(answer.question_id, None)
                .await?;
        }

        info!(answer_id = %answer_id, actor = %actor, "Answer deleted");

        Ok(())
    }

    /// Persist a notification, swallowing failures
    ///
    /// Notification delivery must never fail the triggering action.
    async fn notify(
        &self,
        recipient_id: Snowflake,
        sender_id: Snowflake,
        kind: NotificationKind,
        message: String,
        question_id: Option<Snowflake>,
        answer_id: Option<Snowflake>,
    ) {
        let notification =
            Notification::new(self.ctx.generate_id(), recipient_id, sender_id, kind, message)
                .with_refs(question_id, answer_id);

        if let Err(e) = self.ctx.notification_repo().create(&notification).await {
            warn!(
                recipient_id = %recipient_id,
                error = %e,
                "Failed to persist notification"
            );
        }
    }
}
