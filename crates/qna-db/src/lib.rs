//! # qna-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `qna-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use qna_db::pool::{create_pool, PoolSettings};
//! use qna_db::repositories::PgUserRepository;
//! use qna_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = PoolSettings::from_env();
//!     let pool = create_pool(&settings).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, PgPool, PoolSettings};
pub use repositories::{
    PgAnswerRepository, PgNotificationRepository, PgQuestionRepository, PgUserRepository,
    PgVoteRepository,
};
