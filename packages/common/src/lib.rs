pub mod config;
pub mod custom_question;
pub mod evaluation;
pub mod language;
pub mod retry;
pub mod scores;
pub mod submission;

pub use custom_question::CustomQuestion;
pub use evaluation::{
    DegradedReason, LanguageResult, LanguageVerdict, QuizResult, SubmissionResult, Verdict,
};
pub use language::Language;
pub use scores::{CategoryScores, ScoreTable};
pub use submission::{ExecutionRequest, Submission, SubmissionInvalid};
