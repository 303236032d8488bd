//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in qna-core.
//! Each repository handles database operations for a specific domain entity.

mod answer;
mod error;
mod notification;
mod question;
mod user;
mod vote;

pub use answer::PgAnswerRepository;
pub use notification::PgNotificationRepository;
pub use question::PgQuestionRepository;
pub use user::PgUserRepository;
pub use vote::PgVoteRepository;
