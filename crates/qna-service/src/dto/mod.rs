//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs

pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateAnswerRequest, CreateQuestionRequest, LoginRequest, RefreshTokenRequest,
    RegisterRequest, UpdateQuestionRequest, UpdateUserRequest, VoteRequest,
};

// Re-export commonly used response types
pub use responses::{
    AnswerResponse, AuthResponse, CurrentUserResponse, HealthResponse, NotificationListResponse,
    NotificationResponse, PaginatedResponse, PaginationMeta, QuestionDetailResponse,
    QuestionResponse, ReadinessResponse, UserResponse, VoteResponse,
};
