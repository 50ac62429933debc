//! Turning sandbox output and quiz answers into verdicts.
//!
//! Matching is exact after trimming surrounding whitespace. There is no
//! partial credit and no fuzzy comparison.

use common::{CategoryScores, DegradedReason, LanguageVerdict, Verdict};

use crate::retry::RetryOutcome;

/// Whether `stdout`, trimmed, is exactly `expected`.
pub fn matches_expected(stdout: &str, expected: &str) -> bool {
    stdout.trim() == expected
}

/// Verdict for one language from its retried execution.
///
/// An exhausted execution is settled as [`LanguageVerdict::Degraded`]; it is
/// scored like a wrong answer but never reported as one.
pub fn evaluate(outcome: &RetryOutcome, expected: &str, scores: CategoryScores) -> LanguageVerdict {
    match outcome {
        RetryOutcome::Succeeded { outcome, .. } => {
            let output = outcome.stdout.trim().to_string();
            LanguageVerdict::Evaluated {
                verdict: scores.verdict(matches_expected(&output, expected)),
                output,
            }
        }
        RetryOutcome::Exhausted { .. } => {
            let reason = outcome
                .degraded_reason()
                .unwrap_or(DegradedReason::Internal {
                    message: "exhausted without history".into(),
                });
            degraded(reason, scores)
        }
    }
}

/// Verdict for a language that could not be evaluated.
pub fn degraded(reason: DegradedReason, scores: CategoryScores) -> LanguageVerdict {
    LanguageVerdict::Degraded {
        verdict: scores.verdict(false),
        reason,
    }
}

/// Verdict for a multiple-choice answer: case-insensitive, whitespace-trimmed
/// match against the correct option letter.
pub fn evaluate_choice(answer: &str, correct: &str, scores: CategoryScores) -> Verdict {
    scores.verdict(answer.trim().to_lowercase() == correct.trim().to_lowercase())
}
