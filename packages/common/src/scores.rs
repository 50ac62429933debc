use serde::{Deserialize, Serialize};

use crate::evaluation::Verdict;
use crate::language::Language;

pub const RUST_SUCCESS_SCORE: f32 = 92.0;
pub const TYPESCRIPT_SUCCESS_SCORE: f32 = 88.0;
pub const QUIZ_SUCCESS_SCORE: f32 = 92.0;
pub const FAILURE_SCORE: f32 = 50.0;

/// Letter of the correct option of the fixed quiz question.
pub const QUIZ_CORRECT_ANSWER: &str = "b";

/// The two scores a category can award. Nothing in between is ever produced.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub success_score: f32,
    pub failure_score: f32,
}

impl CategoryScores {
    pub const fn new(success_score: f32, failure_score: f32) -> Self {
        Self {
            success_score,
            failure_score,
        }
    }

    /// Verdict for a correct or incorrect answer.
    pub fn verdict(&self, correct: bool) -> Verdict {
        if correct {
            Verdict {
                correct: true,
                score: self.success_score,
                wrong: 0,
            }
        } else {
            Verdict {
                correct: false,
                score: self.failure_score,
                wrong: 1,
            }
        }
    }
}

/// Per-category score constants.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreTable {
    pub rust: CategoryScores,
    pub typescript: CategoryScores,
    pub quiz: CategoryScores,
}

impl ScoreTable {
    pub fn language(&self, language: Language) -> CategoryScores {
        match language {
            Language::Rust => self.rust,
            Language::TypeScript => self.typescript,
        }
    }

    /// Verdict awarded when a language could not be evaluated.
    ///
    /// Degraded evaluations are settled exactly like wrong answers: the
    /// failure score and one wrong answer.
    pub fn degraded(&self, language: Language) -> Verdict {
        self.language(language).verdict(false)
    }
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            rust: CategoryScores::new(RUST_SUCCESS_SCORE, FAILURE_SCORE),
            typescript: CategoryScores::new(TYPESCRIPT_SUCCESS_SCORE, FAILURE_SCORE),
            quiz: CategoryScores::new(QUIZ_SUCCESS_SCORE, FAILURE_SCORE),
        }
    }
}
