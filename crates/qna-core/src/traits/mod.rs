//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AnswerRepository, NotificationRepository, QuestionQuery, QuestionRepository, QuestionSort,
    RepoResult, UserRepository, VoteRepository,
};
