//! Question entity <-> model mapper

use qna_core::entities::Question;
use qna_core::value_objects::Snowflake;

use crate::models::QuestionModel;

/// Convert QuestionModel to Question entity
impl From<QuestionModel> for Question {
    fn from(model: QuestionModel) -> Self {
        Question {
            id: Snowflake::new(model.id),
            author_id: Snowflake::new(model.author_id),
            title: model.title,
            description: model.description,
            tags: model.tags,
            views: model.views,
            active: model.active,
            closed: model.closed,
            accepted_answer_id: model.accepted_answer_id.map(Snowflake::new),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
