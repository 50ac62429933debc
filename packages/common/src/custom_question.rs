use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Option letters a multiple-choice question can be answered with.
pub const OPTION_LETTERS: [&str; 4] = ["a", "b", "c", "d"];

/// Recruiter-defined question shown to candidates alongside the fixed quiz.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CustomQuestion {
    #[schema(example = "3f2c0d4e-8f43-4c59-9d59-0b8c5c2f3a10")]
    pub id: String,
    /// Free-text question.
    #[schema(example = "Describe a project you are proud of.")]
    pub custom_question: String,
    /// Multiple-choice question text.
    #[schema(example = "Which crate provides async runtime primitives?")]
    pub mcq_question: String,
    /// The four options, in `a`..`d` order.
    pub mcq_options: Vec<String>,
    /// Letter of the correct option.
    #[schema(example = "a")]
    pub mcq_correct: String,
    #[schema(example = "2025-10-01T14:30:00Z")]
    pub created_at: DateTime<Utc>,
}

impl CustomQuestion {
    /// Create a question with a generated ID.
    pub fn new(
        custom_question: impl Into<String>,
        mcq_question: impl Into<String>,
        mcq_options: Vec<String>,
        mcq_correct: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            custom_question: custom_question.into(),
            mcq_question: mcq_question.into(),
            mcq_options,
            mcq_correct: mcq_correct.into().trim().to_lowercase(),
            created_at: Utc::now(),
        }
    }
}
