//! Error handling utilities for repositories

use qna_core::error::DomainError;
use qna_core::value_objects::Snowflake;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: Snowflake) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "question not found" error
pub fn question_not_found() -> DomainError {
    DomainError::QuestionNotFound
}

/// Create an "answer not found" error
pub fn answer_not_found() -> DomainError {
    DomainError::AnswerNotFound
}

/// Create a "notification not found" error
pub fn notification_not_found() -> DomainError {
    DomainError::NotificationNotFound
}
