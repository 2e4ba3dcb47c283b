// Quiz Domain Layer

mod entities;
mod value_objects;

pub use entities::*;
pub use value_objects::*;

use thiserror::Error;

/// 问卷领域错误
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Feelings must be at most {max} characters, got {len}")]
    FeelingsTooLong { len: usize, max: usize },
}
