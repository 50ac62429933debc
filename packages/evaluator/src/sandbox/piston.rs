//! Client for a Piston-compatible code execution service.
//!
//! Sends `POST {base}/api/v2/execute` and reads the `run` stage of the reply.

use std::time::Instant;

use async_trait::async_trait;
use common::ExecutionRequest;
use common::config::SandboxAppConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{ExecutionOutcome, SandboxClient};
use crate::error::SandboxError;

#[derive(Debug, Serialize)]
struct ExecuteRequestBody<'a> {
    language: &'a str,
    version: &'a str,
    files: Vec<SourceFile<'a>>,
}

#[derive(Debug, Serialize)]
struct SourceFile<'a> {
    name: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ExecuteResponseBody {
    run: Option<Stage>,
}

#[derive(Debug, Deserialize)]
struct Stage {
    #[serde(default)]
    stdout: String,
    #[serde(default)]
    stderr: String,
    code: Option<i32>,
}

/// Sandbox client backed by the Piston HTTP API.
pub struct PistonClient {
    http: reqwest::Client,
    config: SandboxAppConfig,
}

impl PistonClient {
    pub fn new(config: SandboxAppConfig) -> Result<Self, SandboxError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| SandboxError::Transport(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self::with_http_client(http, config))
    }

    /// Create a client with a custom HTTP client.
    pub fn with_http_client(http: reqwest::Client, config: SandboxAppConfig) -> Self {
        Self { http, config }
    }

    fn execute_url(&self) -> String {
        format!("{}/api/v2/execute", self.config.url.trim_end_matches('/'))
    }
}

#[async_trait]
impl SandboxClient for PistonClient {
    #[instrument(skip(self, request), fields(language = %request.language))]
    async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionOutcome, SandboxError> {
        let body = ExecuteRequestBody {
            language: request.language.as_str(),
            version: self.config.version(request.language),
            files: vec![SourceFile {
                name: request.language.file_name(),
                content: &request.source,
            }],
        };

        let started = Instant::now();
        let response = self
            .http
            .post(self.execute_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| SandboxError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SandboxError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ExecuteResponseBody = response
            .json()
            .await
            .map_err(|e| SandboxError::Decode(e.to_string()))?;
        let elapsed = started.elapsed();

        let run = parsed.run.ok_or(SandboxError::MissingRun)?;
        debug!(
            exit_code = ?run.code,
            elapsed_ms = elapsed.as_millis() as u64,
            "Sandbox run finished"
        );

        Ok(ExecutionOutcome {
            success: run.code == Some(0),
            stdout: run.stdout,
            stderr: run.stderr,
            exit_code: run.code,
            elapsed,
        })
    }
}
