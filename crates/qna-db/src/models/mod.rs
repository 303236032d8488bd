//! Database models - SQLx-compatible structs for PostgreSQL tables

mod answer;
mod notification;
mod question;
mod user;
mod vote;

pub use answer::AnswerModel;
pub use notification::NotificationModel;
pub use question::QuestionModel;
pub use user::UserModel;
pub use vote::{VoteModel, VoteTallyModel};
