//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod answer;
pub mod auth;
pub mod context;
pub mod error;
pub mod notification;
pub mod question;
pub mod user;
pub mod vote;

// Re-export all services for convenience
pub use answer::AnswerService;
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use notification::NotificationService;
pub use question::QuestionService;
pub use user::UserService;
pub use vote::{VoteService, VoteTarget};
