//! User entity <-> model mapper

use qna_core::entities::User;
use qna_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity (password hash stays in the db layer)
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            email: model.email,
            reputation: model.reputation,
            bio: model.bio,
            admin: model.admin,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
