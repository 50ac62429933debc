pub mod piston;

use std::time::Duration;

use async_trait::async_trait;
use common::ExecutionRequest;
use serde::{Deserialize, Serialize};

use crate::error::SandboxError;

/// Raw result of one sandbox run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionOutcome {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
    /// True when the run exited with code 0.
    pub success: bool,
    /// Wall-clock time of the sandbox call.
    pub elapsed: Duration,
}

impl ExecutionOutcome {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_micros() as f64 / 1000.0
    }
}

/// Runs source code in an external execution sandbox.
///
/// One call is one network round-trip; retrying is the caller's job.
#[async_trait]
pub trait SandboxClient: Send + Sync {
    async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionOutcome, SandboxError>;
}
