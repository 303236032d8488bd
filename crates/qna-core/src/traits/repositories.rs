//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Answer, Notification, Question, User, Vote, VoteTally};
use crate::error::DomainError;
use crate::value_objects::{Snowflake, VoteType};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Check if username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update profile fields (username, bio) and reputation
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;
}

// ============================================================================
// Question Repository
// ============================================================================

/// Sort order for question listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuestionSort {
    #[default]
    Newest,
    Oldest,
    /// Raw upvote count descending, downvote count ascending as tie-break.
    /// Deliberately not net score; see the listing service docs.
    Votes,
    Views,
}

/// Filter/sort/page options for question listings
#[derive(Debug, Clone, Default)]
pub struct QuestionQuery {
    /// Union match: any overlapping tag qualifies
    pub tags: Option<Vec<String>>,
    /// Full-text match over title + description
    pub search: Option<String>,
    pub sort: QuestionSort,
    pub limit: i64,
    pub offset: i64,
}

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Find question by ID (active or not)
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Question>>;

    /// List active questions matching the query, plus the total match count
    async fn list(&self, query: &QuestionQuery) -> RepoResult<(Vec<Question>, i64)>;

    /// Create a new question
    async fn create(&self, question: &Question) -> RepoResult<()>;

    /// Update mutable fields (title, description, tags, closed, active)
    async fn update(&self, question: &Question) -> RepoResult<()>;

    /// Soft delete a question
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Bump the view counter by one
    async fn increment_views(&self, id: Snowflake) -> RepoResult<()>;

    /// Set (or clear) the accepted-answer back-reference
    async fn set_accepted_answer(
        &self,
        question_id: Snowflake,
        answer_id: Option<Snowflake>,
    ) -> RepoResult<()>;
}

// ============================================================================
// Answer Repository
// ============================================================================

#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// Find answer by ID (active or not, for historical integrity)
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Answer>>;

    /// List the active answers of a question, oldest first
    async fn find_by_question(&self, question_id: Snowflake) -> RepoResult<Vec<Answer>>;

    /// Create a new answer
    async fn create(&self, answer: &Answer) -> RepoResult<()>;

    /// Soft delete an answer
    async fn soft_delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Set the accepted flag and timestamp
    async fn mark_accepted(&self, id: Snowflake) -> RepoResult<()>;

    /// Clear the accepted flag and timestamp
    async fn clear_accepted(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Vote Repository
// ============================================================================

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Find the voter's current vote on a content item, if any
    async fn find(&self, content_id: Snowflake, voter_id: Snowflake) -> RepoResult<Option<Vote>>;

    /// Insert a new vote row
    async fn create(&self, vote: &Vote) -> RepoResult<()>;

    /// Switch an existing vote to the other direction
    async fn update_type(
        &self,
        content_id: Snowflake,
        voter_id: Snowflake,
        vote_type: VoteType,
    ) -> RepoResult<()>;

    /// Retract a vote
    async fn delete(&self, content_id: Snowflake, voter_id: Snowflake) -> RepoResult<()>;

    /// Count up/down votes for one content item
    async fn tally(&self, content_id: Snowflake) -> RepoResult<VoteTally>;

    /// Count up/down votes for many content items at once
    async fn tally_many(&self, content_ids: &[Snowflake]) -> RepoResult<Vec<(Snowflake, VoteTally)>>;
}

// ============================================================================
// Notification Repository
// ============================================================================

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Find notification by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Notification>>;

    /// List a recipient's notifications, newest first
    async fn find_by_recipient(
        &self,
        recipient_id: Snowflake,
        unread_only: bool,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<Notification>>;

    /// Total notifications for a recipient (optionally unread only)
    async fn count_by_recipient(&self, recipient_id: Snowflake, unread_only: bool)
        -> RepoResult<i64>;

    /// Create a new notification
    async fn create(&self, notification: &Notification) -> RepoResult<()>;

    /// Mark one notification as read
    async fn mark_read(&self, id: Snowflake) -> RepoResult<()>;

    /// Mark all of a recipient's notifications as read, returning the count
    async fn mark_all_read(&self, recipient_id: Snowflake) -> RepoResult<u64>;

    /// Delete a notification
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}
