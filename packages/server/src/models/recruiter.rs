use common::CustomQuestion;
use common::custom_question::OPTION_LETTERS;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Request body for setting the custom question.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateCustomQuestionRequest {
    #[schema(example = "Describe a project you are proud of.")]
    pub custom_question: String,
    #[schema(example = "Which crate provides async runtime primitives?")]
    pub mcq_question: String,
    /// Exactly four options, answered as `a`..`d`.
    #[schema(example = json!(["tokio", "serde", "regex", "rand"]))]
    pub mcq_options: Vec<String>,
    /// Letter of the correct option.
    #[schema(example = "a")]
    pub mcq_correct: String,
}

impl From<CreateCustomQuestionRequest> for CustomQuestion {
    fn from(req: CreateCustomQuestionRequest) -> Self {
        CustomQuestion::new(
            req.custom_question.trim(),
            req.mcq_question.trim(),
            req.mcq_options
                .into_iter()
                .map(|o| o.trim().to_string())
                .collect(),
            req.mcq_correct,
        )
    }
}

/// The custom question currently shown to candidates.
#[derive(Serialize, utoipa::ToSchema)]
pub struct CustomQuestionStatus {
    pub has_custom: bool,
    pub input: Option<CustomQuestion>,
}

impl From<Option<CustomQuestion>> for CustomQuestionStatus {
    fn from(input: Option<CustomQuestion>) -> Self {
        Self {
            has_custom: input.is_some(),
            input,
        }
    }
}

pub fn validate_create_custom_question(req: &CreateCustomQuestionRequest) -> Result<(), AppError> {
    if req.custom_question.trim().is_empty() {
        return Err(AppError::Validation("Custom question is required".into()));
    }
    if req.mcq_question.trim().is_empty() {
        return Err(AppError::Validation(
            "Multiple-choice question is required".into(),
        ));
    }
    if req.mcq_options.len() != OPTION_LETTERS.len()
        || req.mcq_options.iter().any(|o| o.trim().is_empty())
    {
        return Err(AppError::Validation(
            "Exactly 4 non-empty options are required".into(),
        ));
    }
    let correct = req.mcq_correct.trim().to_lowercase();
    if !OPTION_LETTERS.contains(&correct.as_str()) {
        return Err(AppError::Validation(
            "Correct option must be one of a, b, c, d".into(),
        ));
    }
    Ok(())
}
