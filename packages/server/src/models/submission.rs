use common::{CustomQuestion, Submission};
use serde::Deserialize;

/// Request body for submitting a candidate's answers.
///
/// Missing fields deserialize as empty strings so the evaluator can report
/// which one is required.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateSubmissionRequest {
    /// Rust implementation of `sum`.
    #[serde(default)]
    #[schema(example = "fn sum(arr: Vec<i32>) -> i32 { arr.iter().sum() }")]
    pub rust_code: String,
    /// TypeScript implementation of `sum`.
    #[serde(default, alias = "ts_code")]
    #[schema(example = "function sum(arr: number[]): number { return arr.reduce((a, b) => a + b, 0); }")]
    pub typescript_code: String,
    /// Option letter answering the fixed quiz question.
    #[serde(default, alias = "ai_answer")]
    #[schema(example = "b")]
    pub quiz_answer: String,
    /// Option letter answering the recruiter's custom question, if one is set.
    #[schema(example = "a")]
    pub custom_answer: Option<String>,
}

impl CreateSubmissionRequest {
    /// Build the submission, attaching `custom` when the candidate answered it.
    pub fn into_submission(self, custom: Option<CustomQuestion>) -> Submission {
        let submission = Submission::new(self.rust_code, self.typescript_code, self.quiz_answer);
        match (custom, self.custom_answer) {
            (Some(question), Some(answer)) => submission.with_custom_answer(question, answer),
            _ => submission,
        }
    }
}
