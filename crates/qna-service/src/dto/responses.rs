//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

use qna_core::entities::{Answer, Notification, Question, User, VoteTally};

// ============================================================================
// Common Response Types
// ============================================================================

/// Paginated response with page-based pagination
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    /// Build a page of results from the total match count
    pub fn new(data: Vec<T>, current: i64, limit: i64, total: i64) -> Self {
        Self {
            data,
            pagination: PaginationMeta::new(current, limit, total),
        }
    }
}

/// Pagination metadata (1-indexed pages)
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub current: i64,
    pub pages: i64,
    pub total: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(current: i64, limit: i64, total: i64) -> Self {
        let pages = if total == 0 { 1 } else { (total + limit - 1) / limit };
        Self {
            current,
            pages,
            total,
            has_next: current < pages,
            has_prev: current > 1,
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CurrentUserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Public user response (limited fields)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub reputation: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            reputation: user.reputation,
            bio: user.bio.clone(),
            created_at: user.created_at,
        }
    }
}

/// Current authenticated user response (includes email)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub reputation: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub admin: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            reputation: user.reputation,
            bio: user.bio.clone(),
            admin: user.admin,
            created_at: user.created_at,
        }
    }
}

// ============================================================================
// Question Responses
// ============================================================================

/// Question response for listings
#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub views: i64,
    pub closed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_answer_id: Option<String>,
    pub upvotes: i64,
    pub downvotes: i64,
    pub score: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl QuestionResponse {
    /// Combine a question with its vote tally
    pub fn new(question: &Question, tally: &VoteTally) -> Self {
        Self {
            id: question.id.to_string(),
            author_id: question.author_id.to_string(),
            title: question.title.clone(),
            description: question.description.clone(),
            tags: question.tags.clone(),
            views: question.views,
            closed: question.closed,
            accepted_answer_id: question.accepted_answer_id.map(|id| id.to_string()),
            upvotes: tally.upvotes,
            downvotes: tally.downvotes,
            score: tally.score(),
            created_at: question.created_at,
            updated_at: question.updated_at,
        }
    }
}

/// Question response with populated answers
#[derive(Debug, Serialize)]
pub struct QuestionDetailResponse {
    #[serde(flatten)]
    pub question: QuestionResponse,
    pub answers: Vec<AnswerResponse>,
}

// ============================================================================
// Answer Responses
// ============================================================================

/// Answer response
#[derive(Debug, Clone, Serialize)]
pub struct AnswerResponse {
    pub id: String,
    pub question_id: String,
    pub author_id: String,
    pub content: String,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_at: Option<DateTime<Utc>>,
    pub upvotes: i64,
    pub downvotes: i64,
    pub score: i64,
    pub created_at: DateTime<Utc>,
}

impl AnswerResponse {
    /// Combine an answer with its vote tally
    pub fn new(answer: &Answer, tally: &VoteTally) -> Self {
        Self {
            id: answer.id.to_string(),
            question_id: answer.question_id.to_string(),
            author_id: answer.author_id.to_string(),
            content: answer.content.clone(),
            accepted: answer.accepted,
            accepted_at: answer.accepted_at,
            upvotes: tally.upvotes,
            downvotes: tally.downvotes,
            score: tally.score(),
            created_at: answer.created_at,
        }
    }
}

// ============================================================================
// Vote Responses
// ============================================================================

/// Result of casting, switching, or retracting a vote
#[derive(Debug, Serialize)]
pub struct VoteResponse {
    pub content_id: String,
    pub upvotes: i64,
    pub downvotes: i64,
    pub vote_score: i64,
    /// The voter's vote after this operation, absent if retracted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub your_vote: Option<String>,
}

// ============================================================================
// Notification Responses
// ============================================================================

/// Notification response
#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: String,
    pub sender_id: String,
    pub kind: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_id: Option<String>,
    pub read: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<&Notification> for NotificationResponse {
    fn from(n: &Notification) -> Self {
        Self {
            id: n.id.to_string(),
            sender_id: n.sender_id.to_string(),
            kind: n.kind.to_string(),
            message: n.message.clone(),
            question_id: n.question_id.map(|id| id.to_string()),
            answer_id: n.answer_id.map(|id| id.to_string()),
            read: n.read,
            read_at: n.read_at,
            created_at: n.created_at,
        }
    }
}

/// Notification listing with the recipient's unread counter
#[derive(Debug, Serialize)]
pub struct NotificationListResponse {
    pub data: Vec<NotificationResponse>,
    pub unread_count: i64,
    pub pagination: PaginationMeta,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Readiness response with dependency checks
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: &'static str,
}
