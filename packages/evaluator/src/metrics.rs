//! Aggregates shown on the recruiter dashboard.

use common::{Language, SubmissionResult};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardMetrics {
    pub total_submissions: usize,
    /// Percentage of submissions awarded the category's success score.
    pub rust_success_rate: f64,
    pub typescript_success_rate: f64,
    pub quiz_success_rate: f64,
    /// Mean sandbox time in milliseconds. Degraded runs count as 0.
    pub avg_rust_time: f64,
    pub avg_typescript_time: f64,
    pub total_rust_wrong: u32,
    pub total_typescript_wrong: u32,
    /// Most recently recorded first.
    pub recent: Vec<SubmissionResult>,
}

impl DashboardMetrics {
    /// `results` must be in recording order, oldest first, as
    /// [`ResultsStore::results`](crate::store::ResultsStore::results) returns them.
    pub fn from_results(results: &[SubmissionResult], recent_limit: usize) -> Self {
        let total = results.len();

        let rate = |correct: usize| {
            if total == 0 {
                0.0
            } else {
                100.0 * correct as f64 / total as f64
            }
        };
        let language_rate = |language: Language| {
            rate(
                results
                    .iter()
                    .filter(|r| r.language(language).outcome.verdict().correct)
                    .count(),
            )
        };
        let avg_time = |language: Language| {
            if total == 0 {
                0.0
            } else {
                results
                    .iter()
                    .map(|r| r.language(language).time_ms)
                    .sum::<f64>()
                    / total as f64
            }
        };
        let wrong = |language: Language| -> u32 {
            results.iter().map(|r| r.language(language).wrong()).sum()
        };

        let recent = results.iter().rev().take(recent_limit).cloned().collect();

        Self {
            total_submissions: total,
            rust_success_rate: language_rate(Language::Rust),
            typescript_success_rate: language_rate(Language::TypeScript),
            quiz_success_rate: rate(results.iter().filter(|r| r.quiz.verdict.correct).count()),
            avg_rust_time: avg_time(Language::Rust),
            avg_typescript_time: avg_time(Language::TypeScript),
            total_rust_wrong: wrong(Language::Rust),
            total_typescript_wrong: wrong(Language::TypeScript),
            recent,
        }
    }
}
