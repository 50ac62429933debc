use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single failed attempt record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryAttempt {
    /// 1-based attempt number.
    pub attempt: u32,
    /// Error message from the failed attempt.
    pub error: String,
    /// When this attempt failed.
    pub timestamp: DateTime<Utc>,
}

impl RetryAttempt {
    pub fn new(attempt: u32, error: impl Into<String>) -> Self {
        Self {
            attempt,
            error: error.into(),
            timestamp: Utc::now(),
        }
    }
}

/// What to do after an attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Wait `delay`, then make attempt number `next_attempt`.
    Retry { next_attempt: u32, delay: Duration },
    /// The attempt budget is spent.
    Exhausted,
}

/// Attempt budget and backoff base for sandbox calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Decide what follows the failure of attempt number `failed_attempt`.
    pub fn decide(&self, failed_attempt: u32) -> RetryDecision {
        if failed_attempt < self.max_attempts {
            RetryDecision::Retry {
                next_attempt: failed_attempt + 1,
                delay: calculate_backoff(failed_attempt, self.base_delay),
            }
        } else {
            RetryDecision::Exhausted
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(300),
        }
    }
}

/// Calculate linear backoff delay.
///
/// Formula: `base * attempt`, saturating. Attempt 0 waits nothing.
pub fn calculate_backoff(attempt: u32, base: Duration) -> Duration {
    base.saturating_mul(attempt)
}
