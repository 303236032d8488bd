//! # qna-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AnswerResponse, AuthResponse, CreateAnswerRequest, CreateQuestionRequest,
    CurrentUserResponse, HealthResponse, LoginRequest, NotificationListResponse,
    NotificationResponse, PaginatedResponse, PaginationMeta, QuestionDetailResponse,
    QuestionResponse, ReadinessResponse, RefreshTokenRequest, RegisterRequest,
    UpdateQuestionRequest, UpdateUserRequest, UserResponse, VoteRequest, VoteResponse,
};
pub use services::{
    AnswerService, AuthService, NotificationService, QuestionService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserService, VoteService, VoteTarget,
};
