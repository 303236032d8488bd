//! Domain entities

mod answer;
mod notification;
mod question;
mod user;
mod vote;

pub use answer::Answer;
pub use notification::{Notification, NotificationKind};
pub use question::{validate_tags, Question, MAX_TAGS, MAX_TAG_LEN, MIN_TAGS};
pub use user::User;
pub use vote::{Vote, VoteTally};
