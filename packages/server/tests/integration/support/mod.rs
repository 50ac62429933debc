use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use common::config::{EvaluationAppConfig, ResultsAppConfig, RetryAppConfig, SandboxAppConfig};
use common::{CustomQuestion, ExecutionRequest, Language, SubmissionResult};
use evaluator::{
    ExecutionOutcome, InMemoryResultsStore, ResultsStore, SandboxClient, SandboxError, StoreError,
};
use reqwest::Client;
use serde_json::{Value, json};

use server::config::{AppConfig, CorsConfig, ServerConfig};
use server::state::AppState;

pub mod routes {
    pub const SUBMISSIONS: &str = "/api/v1/submissions";
    pub const RESULTS: &str = "/api/v1/results";
    pub const RECRUITER: &str = "/api/v1/recruiter";
}

pub const RUST_CODE: &str = "fn sum(arr: Vec<i32>) -> i32 { arr.iter().sum() }";
pub const TS_CODE: &str =
    "function sum(arr: number[]): number { return arr.reduce((a, b) => a + b, 0); }";

/// A valid submission body with the given quiz answer.
pub fn submission_body(quiz_answer: &str) -> Value {
    json!({
        "rust_code": RUST_CODE,
        "typescript_code": TS_CODE,
        "quiz_answer": quiz_answer,
    })
}

/// What the fake sandbox does for one language.
#[derive(Clone)]
pub enum Behavior {
    Prints(&'static str),
    RateLimited,
}

/// In-process stand-in for the execution service.
pub struct FakeSandbox {
    behaviors: Mutex<HashMap<Language, Behavior>>,
    calls: AtomicU32,
}

impl FakeSandbox {
    pub fn printing(stdout: &'static str) -> Self {
        Self {
            behaviors: Mutex::new(
                Language::ALL
                    .iter()
                    .map(|l| (*l, Behavior::Prints(stdout)))
                    .collect(),
            ),
            calls: AtomicU32::new(0),
        }
    }

    pub fn set(&self, language: Language, behavior: Behavior) {
        self.behaviors.lock().unwrap().insert(language, behavior);
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SandboxClient for FakeSandbox {
    async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionOutcome, SandboxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let behavior = self.behaviors.lock().unwrap()[&request.language].clone();
        match behavior {
            Behavior::Prints(stdout) => Ok(ExecutionOutcome {
                stdout: format!("{stdout}\n"),
                stderr: String::new(),
                exit_code: Some(0),
                success: true,
                elapsed: Duration::from_millis(150),
            }),
            Behavior::RateLimited => Err(SandboxError::Status {
                status: 429,
                body: "rate limited".into(),
            }),
        }
    }
}

/// Records results but cannot read the custom question.
#[derive(Default)]
pub struct QuestionUnreadableStore {
    inner: InMemoryResultsStore,
}

#[async_trait]
impl ResultsStore for QuestionUnreadableStore {
    async fn record(&self, result: SubmissionResult) -> Result<(), StoreError> {
        self.inner.record(result).await
    }

    async fn results(&self) -> Result<Vec<SubmissionResult>, StoreError> {
        self.inner.results().await
    }

    async fn set_custom_question(&self, question: CustomQuestion) -> Result<(), StoreError> {
        self.inner.set_custom_question(question).await
    }

    async fn custom_question(&self) -> Result<Option<CustomQuestion>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
}

/// A running test server.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub sandbox: Arc<FakeSandbox>,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

impl TestApp {
    /// Spawn with a sandbox that answers every language correctly.
    pub async fn spawn() -> Self {
        Self::spawn_with(FakeSandbox::printing("6")).await
    }

    pub async fn spawn_with(sandbox: FakeSandbox) -> Self {
        Self::spawn_with_store(sandbox, Arc::new(InMemoryResultsStore::new())).await
    }

    pub async fn spawn_with_store(sandbox: FakeSandbox, store: Arc<dyn ResultsStore>) -> Self {
        let app_config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors: CorsConfig {
                    allow_origins: vec!["http://localhost:3000".into()],
                    max_age: 3600,
                },
            },
            sandbox: SandboxAppConfig::default(),
            retry: RetryAppConfig {
                max_attempts: 3,
                base_delay_ms: 1,
            },
            evaluation: EvaluationAppConfig { deadline_ms: 5_000 },
            results: ResultsAppConfig { recent_limit: 20 },
        };

        let sandbox = Arc::new(sandbox);
        let state = AppState::new(app_config, sandbox.clone(), store);
        let app = server::build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
            sandbox,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn post(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn post_raw(&self, path: &str, body: &'static str) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    /// Submit a valid body and assert it was accepted.
    pub async fn submit(&self, quiz_answer: &str) -> Value {
        let res = self.post(routes::SUBMISSIONS, &submission_body(quiz_answer)).await;
        assert_eq!(res.status, 201, "Submission failed: {}", res.text);
        res.body
    }

    /// Set the custom question and assert it was stored.
    pub async fn set_custom_question(&self, correct: &str) -> Value {
        let res = self
            .post(
                routes::RECRUITER,
                &json!({
                    "custom_question": "Describe a project you are proud of.",
                    "mcq_question": "Which crate is an async runtime?",
                    "mcq_options": ["tokio", "serde", "regex", "rand"],
                    "mcq_correct": correct,
                }),
            )
            .await;
        assert_eq!(res.status, 201, "Setting custom question failed: {}", res.text);
        res.body
    }
}

impl TestResponse {
    pub async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }
}
