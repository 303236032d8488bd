//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser{suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Token refresh request
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: CurrentUserResponse,
}

/// Current user response (includes email)
#[derive(Debug, Deserialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub reputation: i32,
    pub bio: Option<String>,
    pub admin: bool,
    pub created_at: String,
}

/// Public user response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub reputation: i32,
    pub bio: Option<String>,
    pub created_at: String,
}

/// Create question request
#[derive(Debug, Serialize)]
pub struct CreateQuestionRequest {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl CreateQuestionRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("How do I test question {suffix}?"),
            description: format!(
                "A sufficiently long description for test question {suffix} goes here."
            ),
            tags: vec!["testing".to_string(), "rust".to_string()],
        }
    }

    pub fn with_tags(tags: Vec<&str>) -> Self {
        let mut request = Self::unique();
        request.tags = tags.into_iter().map(String::from).collect();
        request
    }
}

/// Update question request
#[derive(Debug, Default, Serialize)]
pub struct UpdateQuestionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Question response
#[derive(Debug, Deserialize)]
pub struct QuestionResponse {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub views: i64,
    pub closed: bool,
    pub accepted_answer_id: Option<String>,
    pub upvotes: i64,
    pub downvotes: i64,
    pub score: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Question detail response (question fields flattened alongside answers)
#[derive(Debug, Deserialize)]
pub struct QuestionDetailResponse {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub tags: Vec<String>,
    pub views: i64,
    pub closed: bool,
    pub accepted_answer_id: Option<String>,
    pub upvotes: i64,
    pub downvotes: i64,
    pub score: i64,
    pub answers: Vec<AnswerResponse>,
}

/// Paginated question listing
#[derive(Debug, Deserialize)]
pub struct QuestionListResponse {
    pub data: Vec<QuestionResponse>,
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Deserialize)]
pub struct PaginationMeta {
    pub current: i64,
    pub pages: i64,
    pub total: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Create answer request
#[derive(Debug, Serialize)]
pub struct CreateAnswerRequest {
    pub content: String,
}

impl CreateAnswerRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            content: format!("This is a sufficiently detailed test answer number {suffix}."),
        }
    }
}

/// Answer response
#[derive(Debug, Deserialize)]
pub struct AnswerResponse {
    pub id: String,
    pub question_id: String,
    pub author_id: String,
    pub content: String,
    pub accepted: bool,
    pub accepted_at: Option<String>,
    pub upvotes: i64,
    pub downvotes: i64,
    pub score: i64,
    pub created_at: String,
}

/// Vote request
#[derive(Debug, Serialize)]
pub struct VoteRequest {
    pub vote_type: String,
}

impl VoteRequest {
    pub fn up() -> Self {
        Self {
            vote_type: "up".to_string(),
        }
    }

    pub fn down() -> Self {
        Self {
            vote_type: "down".to_string(),
        }
    }
}

/// Vote response
#[derive(Debug, Deserialize)]
pub struct VoteResponse {
    pub content_id: String,
    pub upvotes: i64,
    pub downvotes: i64,
    pub vote_score: i64,
    pub your_vote: Option<String>,
}

/// Notification response
#[derive(Debug, Deserialize)]
pub struct NotificationResponse {
    pub id: String,
    pub sender_id: String,
    pub kind: String,
    pub message: String,
    pub question_id: Option<String>,
    pub answer_id: Option<String>,
    pub read: bool,
}

/// Notification listing
#[derive(Debug, Deserialize)]
pub struct NotificationListResponse {
    pub data: Vec<NotificationResponse>,
    pub unread_count: i64,
    pub pagination: PaginationMeta,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
