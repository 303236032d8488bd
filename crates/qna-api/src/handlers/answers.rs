//! Answer handlers
//!
//! Endpoints for posting, reading, accepting, voting on, and deleting answers.

use axum::{
    extract::{Path, State},
    Json,
};
use qna_service::{
    AnswerResponse, AnswerService, CreateAnswerRequest, VoteRequest, VoteResponse, VoteService,
    VoteTarget,
};

use crate::extractors::{parse_id, AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Post an answer to a question
///
/// POST /questions/{question_id}/answers
pub async fn create_answer(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(question_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateAnswerRequest>,
) -> ApiResult<Created<Json<AnswerResponse>>> {
    let question_id = parse_id(&question_id, "Question")?;

    let service = AnswerService::new(state.service_context());
    let response = service
        .create_answer(question_id, auth.user_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// Get an answer by ID
///
/// GET /answers/{answer_id}
///
/// Soft-deleted answers stay fetchable by ID so accepted history
/// remains resolvable.
pub async fn get_answer(
    State(state): State<AppState>,
    Path(answer_id): Path<String>,
) -> ApiResult<Json<AnswerResponse>> {
    let answer_id = parse_id(&answer_id, "Answer")?;

    let service = AnswerService::new(state.service_context());
    let response = service.get_answer(answer_id).await?;
    Ok(Json(response))
}

/// Accept an answer (question author only)
///
/// POST /answers/{answer_id}/accept
pub async fn accept_answer(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(answer_id): Path<String>,
) -> ApiResult<Json<AnswerResponse>> {
    let answer_id = parse_id(&answer_id, "Answer")?;

    let service = AnswerService::new(state.service_context());
    let response = service.accept_answer(answer_id, auth.user_id).await?;
    Ok(Json(response))
}

/// Vote on an answer
///
/// POST /answers/{answer_id}/vote
pub async fn vote_answer(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(answer_id): Path<String>,
    Json(request): Json<VoteRequest>,
) -> ApiResult<Json<VoteResponse>> {
    let answer_id = parse_id(&answer_id, "Answer")?;

    let service = VoteService::new(state.service_context());
    let response = service
        .apply_vote(
            VoteTarget::Answer,
            answer_id,
            auth.user_id,
            request.vote_type,
        )
        .await?;
    Ok(Json(response))
}

/// Soft-delete an answer (author or admin)
///
/// DELETE /answers/{answer_id}
pub async fn delete_answer(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(answer_id): Path<String>,
) -> ApiResult<NoContent> {
    let answer_id = parse_id(&answer_id, "Answer")?;

    let service = AnswerService::new(state.service_context());
    service.delete_answer(answer_id, auth.user_id).await?;
    Ok(NoContent)
}
