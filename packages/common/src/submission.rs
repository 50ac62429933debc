use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::custom_question::CustomQuestion;
use crate::language::Language;

/// Output every harness prints when the candidate's `sum` is correct.
pub const EXPECTED_OUTPUT: &str = "6";

/// Rejection of a submission that is missing a required field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct SubmissionInvalid(pub String);

/// Candidate's answer to the recruiter's custom question.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CustomAnswer {
    /// Question as it was when the submission was made.
    pub question: CustomQuestion,
    /// Option letter picked by the candidate.
    pub answer: String,
}

/// A candidate's submission.
///
/// Built once per request and never mutated afterwards; the builder-style
/// methods consume and return the value.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Submission {
    /// Opaque candidate token (UUID).
    pub candidate_id: String,
    /// Rust solution, without harness.
    pub rust_code: String,
    /// TypeScript solution, without harness.
    pub typescript_code: String,
    /// Free-text answer to the fixed quiz question.
    pub quiz_answer: String,
    /// Custom question answer, if the caller attached one.
    pub custom: Option<CustomAnswer>,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    /// Create a new submission with a generated candidate token.
    pub fn new(
        rust_code: impl Into<String>,
        typescript_code: impl Into<String>,
        quiz_answer: impl Into<String>,
    ) -> Self {
        Self {
            candidate_id: Uuid::new_v4().to_string(),
            rust_code: rust_code.into(),
            typescript_code: typescript_code.into(),
            quiz_answer: quiz_answer.into(),
            custom: None,
            submitted_at: Utc::now(),
        }
    }

    /// Attach the recruiter's custom question together with the candidate's answer.
    pub fn with_custom_answer(mut self, question: CustomQuestion, answer: impl Into<String>) -> Self {
        self.custom = Some(CustomAnswer {
            question,
            answer: answer.into(),
        });
        self
    }

    /// Source code submitted for `language`.
    pub fn code(&self, language: Language) -> &str {
        match language {
            Language::Rust => &self.rust_code,
            Language::TypeScript => &self.typescript_code,
        }
    }

    /// Check that every required field is present.
    pub fn validate(&self) -> Result<(), SubmissionInvalid> {
        for language in Language::ALL {
            if self.code(*language).trim().is_empty() {
                return Err(SubmissionInvalid(format!(
                    "{} code is required",
                    language
                )));
            }
        }

        if self.quiz_answer.trim().is_empty() {
            return Err(SubmissionInvalid("Quiz answer is required".into()));
        }

        Ok(())
    }

    /// Build the sandbox request for `language`.
    pub fn execution_request(&self, language: Language) -> ExecutionRequest {
        ExecutionRequest::with_harness(language, self.code(language))
    }
}

/// Source sent to the sandbox: candidate code with the harness appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRequest {
    pub language: Language,
    pub source: String,
}

impl ExecutionRequest {
    /// Append the language's harness to `code`.
    pub fn with_harness(language: Language, code: &str) -> Self {
        Self {
            language,
            source: format!("{}\n\n{}", code.trim_end(), language.harness()),
        }
    }
}
