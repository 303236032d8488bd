//! Question handlers
//!
//! Endpoints for asking, browsing, editing, closing, and voting on questions.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use qna_core::{QuestionQuery, QuestionSort};
use qna_service::{
    CreateQuestionRequest, PaginatedResponse, QuestionDetailResponse, QuestionResponse,
    QuestionService, UpdateQuestionRequest, VoteRequest, VoteResponse, VoteService, VoteTarget,
};
use serde::Deserialize;

use crate::extractors::{parse_id, AuthUser, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Default page size for question listings
const DEFAULT_LIMIT: i64 = 20;
/// Maximum page size for question listings
const MAX_LIMIT: i64 = 50;

/// Query parameters for the question listing
#[derive(Debug, Deserialize)]
pub struct ListQuestionsParams {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub sort: Option<String>,
    /// Comma-separated tag filter, any overlapping tag matches
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

fn parse_sort(raw: &str) -> Result<QuestionSort, ApiError> {
    match raw {
        "newest" => Ok(QuestionSort::Newest),
        "oldest" => Ok(QuestionSort::Oldest),
        "votes" => Ok(QuestionSort::Votes),
        "views" => Ok(QuestionSort::Views),
        other => Err(ApiError::invalid_query(format!(
            "Unknown sort '{other}', expected one of: newest, oldest, votes, views"
        ))),
    }
}

/// List questions with filtering, search, sorting, and pagination
///
/// GET /questions
pub async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<ListQuestionsParams>,
) -> ApiResult<Json<PaginatedResponse<QuestionResponse>>> {
    let page = params.page.unwrap_or(1).max(1);
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    let sort = params
        .sort
        .as_deref()
        .map(parse_sort)
        .transpose()?
        .unwrap_or_default();

    let tags = params.tags.map(|raw| {
        raw.split(',')
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
    });
    let tags = tags.filter(|t| !t.is_empty());

    let search = params
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let query = QuestionQuery {
        tags,
        search,
        sort,
        limit,
        offset: (page - 1) * limit,
    };

    let service = QuestionService::new(state.service_context());
    let response = service.list_questions(query, page).await?;
    Ok(Json(response))
}

/// Ask a new question
///
/// POST /questions
pub async fn create_question(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateQuestionRequest>,
) -> ApiResult<Created<Json<QuestionResponse>>> {
    let service = QuestionService::new(state.service_context());
    let response = service.create_question(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Get a question with its answers
///
/// GET /questions/{question_id}
///
/// Counts a view when the requester is not the author. Anonymous
/// requests count too, which is why auth is optional here.
pub async fn get_question(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(question_id): Path<String>,
) -> ApiResult<Json<QuestionDetailResponse>> {
    let question_id = parse_id(&question_id, "Question")?;

    let service = QuestionService::new(state.service_context());
    let response = service.get_question(question_id, auth.user_id()).await?;
    Ok(Json(response))
}

/// Edit a question (author only)
///
/// PATCH /questions/{question_id}
pub async fn update_question(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(question_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateQuestionRequest>,
) -> ApiResult<Json<QuestionResponse>> {
    let question_id = parse_id(&question_id, "Question")?;

    let service = QuestionService::new(state.service_context());
    let response = service
        .update_question(question_id, auth.user_id, request)
        .await?;
    Ok(Json(response))
}

/// Close a question to new answers (author or admin)
///
/// PATCH /questions/{question_id}/close
pub async fn close_question(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(question_id): Path<String>,
) -> ApiResult<NoContent> {
    let question_id = parse_id(&question_id, "Question")?;

    let service = QuestionService::new(state.service_context());
    service.close_question(question_id, auth.user_id).await?;
    Ok(NoContent)
}

/// Soft-delete a question (author or admin)
///
/// DELETE /questions/{question_id}
pub async fn delete_question(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(question_id): Path<String>,
) -> ApiResult<NoContent> {
    let question_id = parse_id(&question_id, "Question")?;

    let service = QuestionService::new(state.service_context());
    service.delete_question(question_id, auth.user_id).await?;
    Ok(NoContent)
}

/// Vote on a question
///
/// POST /questions/{question_id}/vote
pub async fn vote_question(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(question_id): Path<String>,
    Json(request): Json<VoteRequest>,
) -> ApiResult<Json<VoteResponse>> {
    let question_id = parse_id(&question_id, "Question")?;

    let service = VoteService::new(state.service_context());
    let response = service
        .apply_vote(
            VoteTarget::Question,
            question_id,
            auth.user_id,
            request.vote_type,
        )
        .await?;
    Ok(Json(response))
}
