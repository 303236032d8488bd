//! # qna-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Answer, Notification, NotificationKind, Question, User, Vote, VoteTally, validate_tags,
    MAX_TAGS, MAX_TAG_LEN, MIN_TAGS,
};
pub use error::DomainError;
pub use traits::{
    AnswerRepository, NotificationRepository, QuestionQuery, QuestionRepository, QuestionSort,
    RepoResult, UserRepository, VoteRepository,
};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError, VoteType};
