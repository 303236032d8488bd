//! Answer entity <-> model mapper

use qna_core::entities::Answer;
use qna_core::value_objects::Snowflake;

use crate::models::AnswerModel;

/// Convert AnswerModel to Answer entity
impl From<AnswerModel> for Answer {
    fn from(model: AnswerModel) -> Self {
        Answer {
            id: Snowflake::new(model.id),
            question_id: Snowflake::new(model.question_id),
            author_id: Snowflake::new(model.author_id),
            content: model.content,
            active: model.active,
            accepted: model.accepted,
            accepted_at: model.accepted_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
