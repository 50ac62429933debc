use common::SubmissionInvalid;
use thiserror::Error;

/// The Sandbox Service could not be used for this attempt.
///
/// Every variant is transient from the pipeline's point of view and is
/// retried. "The code ran but printed the wrong thing" is never an error; it
/// comes back as an `ExecutionOutcome`.
#[derive(Debug, Error)]
pub enum SandboxError {
    #[error("Sandbox request failed: {0}")]
    Transport(String),

    #[error("Sandbox returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Sandbox response has no run section")]
    MissingRun,

    #[error("Failed to decode sandbox response: {0}")]
    Decode(String),
}

impl SandboxError {
    /// Whether the service signalled rate limiting (HTTP 429).
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Status { status: 429, .. })
    }
}

/// Errors returned to the caller of the orchestrator.
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("Invalid submission: {0}")]
    SubmissionInvalid(#[from] SubmissionInvalid),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Results store unavailable: {0}")]
    Unavailable(String),
}
