use std::time::Duration;

use config::ConfigError;
use serde::Deserialize;

use crate::language::Language;
use crate::retry::RetryPolicy;

/// Sandbox Service connection settings.
#[derive(Debug, Deserialize, Clone)]
pub struct SandboxAppConfig {
    /// Base URL of the execution service. Default: "https://emkc.org".
    #[serde(default = "default_sandbox_url")]
    pub url: String,
    /// Per-request HTTP timeout in milliseconds. Default: 10000.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// Rust runtime version selector. Default: "*".
    #[serde(default = "default_runtime_version")]
    pub rust_version: String,
    /// TypeScript runtime version selector. Default: "*".
    #[serde(default = "default_runtime_version")]
    pub typescript_version: String,
}

fn default_sandbox_url() -> String {
    "https://emkc.org".into()
}
fn default_request_timeout_ms() -> u64 {
    10_000
}
fn default_runtime_version() -> String {
    "*".into()
}

impl SandboxAppConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Runtime version selector sent for `language`.
    pub fn version(&self, language: Language) -> &str {
        match language {
            Language::Rust => &self.rust_version,
            Language::TypeScript => &self.typescript_version,
        }
    }
}

impl Default for SandboxAppConfig {
    fn default() -> Self {
        Self {
            url: default_sandbox_url(),
            request_timeout_ms: default_request_timeout_ms(),
            rust_version: default_runtime_version(),
            typescript_version: default_runtime_version(),
        }
    }
}

/// Retry settings for sandbox calls.
#[derive(Debug, Deserialize, Clone)]
pub struct RetryAppConfig {
    /// Attempts per language before degrading. Default: 3.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Backoff base; the wait after attempt `n` is `base * n`. Default: 300.
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
}

fn default_max_attempts() -> u32 {
    3
}
fn default_base_delay_ms() -> u64 {
    300
}

impl RetryAppConfig {
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, Duration::from_millis(self.base_delay_ms))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::Message(
                "retry.max_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for RetryAppConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
        }
    }
}

/// Per-submission evaluation settings.
#[derive(Debug, Deserialize, Clone)]
pub struct EvaluationAppConfig {
    /// Deadline for evaluating one submission, in milliseconds. 0 disables it.
    /// Default: 30000.
    #[serde(default = "default_deadline_ms")]
    pub deadline_ms: u64,
}

fn default_deadline_ms() -> u64 {
    30_000
}

impl EvaluationAppConfig {
    pub fn deadline(&self) -> Option<Duration> {
        (self.deadline_ms > 0).then(|| Duration::from_millis(self.deadline_ms))
    }
}

impl Default for EvaluationAppConfig {
    fn default() -> Self {
        Self {
            deadline_ms: default_deadline_ms(),
        }
    }
}

/// Dashboard feed settings.
#[derive(Debug, Deserialize, Clone)]
pub struct ResultsAppConfig {
    /// Number of recent submissions listed in the feed. Default: 20.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_recent_limit() -> usize {
    20
}

impl Default for ResultsAppConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
        }
    }
}
