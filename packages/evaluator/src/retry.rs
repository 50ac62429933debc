use std::sync::Arc;
use std::time::Duration;

use common::retry::{RetryAttempt, RetryDecision, RetryPolicy};
use common::{DegradedReason, ExecutionRequest};
use tracing::{debug, error, instrument, warn};

use crate::sandbox::{ExecutionOutcome, SandboxClient};

/// States of one retried sandbox execution.
///
/// `Pending → Attempting → {Succeeded, BackingOff → Attempting, Exhausted}`.
/// `Succeeded` and `Exhausted` are terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum RetryState {
    Pending,
    Attempting { attempt: u32 },
    BackingOff { next_attempt: u32, delay: Duration },
    Succeeded { attempts: u32, outcome: ExecutionOutcome },
    Exhausted { attempts: u32 },
}

impl RetryState {
    /// Transition taken when attempt number `attempt` failed.
    pub fn after_failure(attempt: u32, policy: &RetryPolicy) -> Self {
        match policy.decide(attempt) {
            RetryDecision::Retry {
                next_attempt,
                delay,
            } => Self::BackingOff {
                next_attempt,
                delay,
            },
            RetryDecision::Exhausted => Self::Exhausted { attempts: attempt },
        }
    }
}

/// Final result of a retried execution. Never an error.
#[derive(Debug, Clone, PartialEq)]
pub enum RetryOutcome {
    Succeeded {
        outcome: ExecutionOutcome,
        attempts: u32,
    },
    /// Every attempt failed; carries the failure of each one.
    Exhausted { history: Vec<RetryAttempt> },
}

impl RetryOutcome {
    /// Reason to record when the execution never produced output.
    pub fn degraded_reason(&self) -> Option<DegradedReason> {
        match self {
            Self::Succeeded { .. } => None,
            Self::Exhausted { history } => Some(DegradedReason::SandboxUnavailable {
                attempts: history.len() as u32,
                last_error: history
                    .last()
                    .map(|a| a.error.clone())
                    .unwrap_or_default(),
            }),
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        match self {
            Self::Succeeded { outcome, .. } => outcome.elapsed_ms(),
            Self::Exhausted { .. } => 0.0,
        }
    }
}

/// Runs a sandbox call with bounded retries and linear backoff.
#[derive(Clone)]
pub struct RetryController {
    client: Arc<dyn SandboxClient>,
    policy: RetryPolicy,
}

impl RetryController {
    pub fn new(client: Arc<dyn SandboxClient>, policy: RetryPolicy) -> Self {
        Self { client, policy }
    }

    /// Drive the state machine until it reaches a terminal state.
    #[instrument(skip(self, request), fields(language = %request.language))]
    pub async fn execute(&self, request: &ExecutionRequest) -> RetryOutcome {
        let mut history = Vec::new();
        let mut state = RetryState::Pending;

        loop {
            state = match state {
                RetryState::Pending => RetryState::Attempting { attempt: 1 },
                RetryState::Attempting { attempt } => match self.client.execute(request).await {
                    Ok(outcome) => RetryState::Succeeded {
                        attempts: attempt,
                        outcome,
                    },
                    Err(e) => {
                        history.push(RetryAttempt::new(attempt, e.to_string()));
                        let next = RetryState::after_failure(attempt, &self.policy);
                        if let RetryState::BackingOff { delay, .. } = &next {
                            warn!(
                                attempt,
                                delay_ms = delay.as_millis() as u64,
                                rate_limited = e.is_rate_limited(),
                                error = %e,
                                "Sandbox attempt failed, backing off"
                            );
                        }
                        next
                    }
                },
                RetryState::BackingOff {
                    next_attempt,
                    delay,
                } => {
                    tokio::time::sleep(delay).await;
                    RetryState::Attempting {
                        attempt: next_attempt,
                    }
                }
                RetryState::Succeeded { attempts, outcome } => {
                    debug!(attempts, "Sandbox execution succeeded");
                    return RetryOutcome::Succeeded { outcome, attempts };
                }
                RetryState::Exhausted { attempts } => {
                    error!(
                        attempts,
                        last_error = history.last().map(|a: &RetryAttempt| a.error.as_str()),
                        "Sandbox attempts exhausted"
                    );
                    return RetryOutcome::Exhausted { history };
                }
            };
        }
    }
}
