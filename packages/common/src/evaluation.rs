use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Scored outcome for one evaluated unit (a language solution or a quiz answer).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Verdict {
    pub correct: bool,
    /// Either the category's success score or its failure score.
    #[schema(example = 92.0)]
    pub score: f32,
    /// Wrong-answer count, 0 or 1.
    #[schema(example = 0)]
    pub wrong: u32,
}

/// Why a language evaluation could not produce a verdict from real output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DegradedReason {
    /// Every attempt against the sandbox failed.
    SandboxUnavailable { attempts: u32, last_error: String },
    /// The caller's deadline expired before the sandbox answered.
    DeadlineExceeded,
    /// The evaluation task failed unexpectedly.
    Internal { message: String },
}

impl DegradedReason {
    /// Text recorded as the language's output.
    pub fn message(&self) -> &'static str {
        match self {
            Self::SandboxUnavailable { .. } => "Error executing code due to rate limiting",
            Self::DeadlineExceeded => "Error executing code: evaluation deadline exceeded",
            Self::Internal { .. } => "Error executing code",
        }
    }
}

/// Verdict for one language, tagged with whether the code was actually run.
///
/// A degraded evaluation still carries a verdict (the failure score with one
/// wrong answer), so every submission has exactly one verdict per language, but
/// the tag keeps "could not run" apart from "ran and was wrong".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LanguageVerdict {
    Evaluated {
        verdict: Verdict,
        /// Trimmed standard output of the run.
        output: String,
    },
    Degraded {
        verdict: Verdict,
        reason: DegradedReason,
    },
}

impl LanguageVerdict {
    pub fn verdict(&self) -> &Verdict {
        match self {
            Self::Evaluated { verdict, .. } | Self::Degraded { verdict, .. } => verdict,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    /// Output text for display.
    pub fn output(&self) -> &str {
        match self {
            Self::Evaluated { output, .. } => output,
            Self::Degraded { reason, .. } => reason.message(),
        }
    }
}

/// Result for one language of a submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LanguageResult {
    pub language: Language,
    /// Sandbox round-trip time in milliseconds. Display only; never scored.
    #[schema(example = 184.5)]
    pub time_ms: f64,
    pub outcome: LanguageVerdict,
}

impl LanguageResult {
    pub fn score(&self) -> f32 {
        self.outcome.verdict().score
    }

    pub fn wrong(&self) -> u32 {
        self.outcome.verdict().wrong
    }
}

/// Result for a multiple-choice answer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct QuizResult {
    /// The answer as submitted.
    #[schema(example = "b")]
    pub answer: String,
    pub verdict: Verdict,
}

/// Finished evaluation of a submission, handed to the results store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SubmissionResult {
    /// Generated submission identifier (UUID).
    #[schema(example = "b7a1f3c2-2f0e-4c6a-9f5e-8d1c2b3a4f50")]
    pub id: String,
    /// Candidate token the submission was made under.
    pub candidate_id: String,
    pub rust: LanguageResult,
    pub typescript: LanguageResult,
    pub quiz: QuizResult,
    /// Custom question result, when one was attached and answered.
    pub custom: Option<QuizResult>,
    #[schema(example = "2025-10-01T14:29:58Z")]
    pub submitted_at: DateTime<Utc>,
    #[schema(example = "2025-10-01T14:30:00Z")]
    pub created_at: DateTime<Utc>,
}

impl SubmissionResult {
    pub fn language(&self, language: Language) -> &LanguageResult {
        match language {
            Language::Rust => &self.rust,
            Language::TypeScript => &self.typescript,
        }
    }
}
