//! User entity - an account identity with reputation and profile

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User entity
///
/// Accounts are never hard-deleted; historical votes and notifications keep
/// referencing the identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub reputation: i32,
    pub bio: Option<String>,
    pub admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with zero reputation
    pub fn new(id: Snowflake, username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            reputation: 0,
            bio: None,
            admin: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a profile edit
    pub fn edit_profile(&mut self, username: Option<String>, bio: Option<String>) {
        if let Some(username) = username {
            self.username = username;
        }
        if bio.is_some() {
            self.bio = bio;
        }
        self.updated_at = Utc::now();
    }

    /// Check whether this user may moderate (soft-delete) others' content
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.admin
    }
}
