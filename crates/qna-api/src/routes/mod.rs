//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{answers, auth, health, notifications, questions, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(question_routes())
        .merge(answer_routes())
        .merge(notification_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_current_user))
        .route("/users/@me", patch(users::update_current_user))
        .route("/users/:user_id", get(users::get_user))
}

/// Question routes
fn question_routes() -> Router<AppState> {
    Router::new()
        .route("/questions", get(questions::list_questions))
        .route("/questions", post(questions::create_question))
        .route("/questions/:question_id", get(questions::get_question))
        .route("/questions/:question_id", patch(questions::update_question))
        .route("/questions/:question_id", delete(questions::delete_question))
        .route("/questions/:question_id/close", patch(questions::close_question))
        .route("/questions/:question_id/vote", post(questions::vote_question))
        .route("/questions/:question_id/answers", post(answers::create_answer))
}

/// Answer routes
fn answer_routes() -> Router<AppState> {
    Router::new()
        .route("/answers/:answer_id", get(answers::get_answer))
        .route("/answers/:answer_id", delete(answers::delete_answer))
        .route("/answers/:answer_id/accept", post(answers::accept_answer))
        .route("/answers/:answer_id/vote", post(answers::vote_answer))
}

/// Notification routes
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(notifications::list_notifications))
        .route("/notifications/read-all", put(notifications::mark_all_read))
        .route("/notifications/:notification_id/read", put(notifications::mark_read))
        .route(
            "/notifications/:notification_id",
            delete(notifications::delete_notification),
        )
}
