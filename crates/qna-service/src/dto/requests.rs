//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use qna_core::VoteType;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 32, message = "Username must be 3-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Update current user request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 3, max = 32, message = "Username must be 3-32 characters"))]
    pub username: Option<String>,

    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: Option<String>,
}

// ============================================================================
// Question Requests
// ============================================================================

/// Ask a question request
///
/// Tag count and shape are checked by domain validation on top of
/// the field-level bounds here.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 10, max = 200, message = "Title must be 10-200 characters"))]
    pub title: String,

    #[validate(length(min = 20, message = "Description must be at least 20 characters"))]
    pub description: String,

    pub tags: Vec<String>,
}

/// Update question request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateQuestionRequest {
    #[validate(length(min = 10, max = 200, message = "Title must be 10-200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 20, message = "Description must be at least 20 characters"))]
    pub description: Option<String>,

    pub tags: Option<Vec<String>>,
}

// ============================================================================
// Answer Requests
// ============================================================================

/// Post an answer request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAnswerRequest {
    #[validate(length(min = 10, message = "Answer must be at least 10 characters"))]
    pub content: String,
}

// ============================================================================
// Vote Requests
// ============================================================================

/// Cast (or toggle) a vote request
#[derive(Debug, Clone, Deserialize)]
pub struct VoteRequest {
    pub vote_type: VoteType,
}
