use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use common::retry::RetryPolicy;
use common::scores::QUIZ_CORRECT_ANSWER;
use common::submission::EXPECTED_OUTPUT;
use common::{
    DegradedReason, Language, LanguageResult, QuizResult, ScoreTable, Submission,
    SubmissionResult,
};
use tokio::time::Instant;
use tokio_util::task::AbortOnDropHandle;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::error::EvaluationError;
use crate::retry::{RetryController, RetryOutcome};
use crate::sandbox::SandboxClient;
use crate::store::ResultsStore;
use crate::verdict;

/// Evaluates submissions end to end and records the results.
pub struct Orchestrator {
    client: Arc<dyn SandboxClient>,
    store: Arc<dyn ResultsStore>,
    policy: RetryPolicy,
    scores: ScoreTable,
    deadline: Option<Duration>,
}

impl Orchestrator {
    pub fn new(client: Arc<dyn SandboxClient>, store: Arc<dyn ResultsStore>) -> Self {
        Self {
            client,
            store,
            policy: RetryPolicy::default(),
            scores: ScoreTable::default(),
            deadline: None,
        }
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_scores(mut self, scores: ScoreTable) -> Self {
        self.scores = scores;
        self
    }

    /// Default deadline applied by [`Orchestrator::evaluate_submission`].
    pub fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }

    pub async fn evaluate_submission(
        &self,
        submission: &Submission,
    ) -> Result<SubmissionResult, EvaluationError> {
        self.evaluate_submission_with_deadline(submission, self.deadline)
            .await
    }

    /// Evaluate both languages concurrently, score the quiz answers, and hand
    /// the combined result to the store.
    ///
    /// Only an invalid submission is an error. A language whose evaluation
    /// cannot finish (sandbox unavailable, deadline passed) is degraded on its
    /// own without affecting the other one.
    #[instrument(skip(self, submission), fields(candidate_id = %submission.candidate_id, submission_id = tracing::field::Empty))]
    pub async fn evaluate_submission_with_deadline(
        &self,
        submission: &Submission,
        deadline: Option<Duration>,
    ) -> Result<SubmissionResult, EvaluationError> {
        submission.validate()?;

        let id = Uuid::new_v4().to_string();
        tracing::Span::current().record("submission_id", id.as_str());

        let deadline = deadline.map(|d| Instant::now() + d);
        let rust = self.spawn_language(submission, Language::Rust);
        let typescript = self.spawn_language(submission, Language::TypeScript);

        let (rust, typescript) = tokio::join!(
            settle(Language::Rust, rust, deadline),
            settle(Language::TypeScript, typescript, deadline),
        );

        let quiz = QuizResult {
            answer: submission.quiz_answer.clone(),
            verdict: verdict::evaluate_choice(
                &submission.quiz_answer,
                QUIZ_CORRECT_ANSWER,
                self.scores.quiz,
            ),
        };

        let custom = submission
            .custom
            .as_ref()
            .filter(|c| !c.answer.trim().is_empty())
            .map(|c| QuizResult {
                answer: c.answer.clone(),
                verdict: verdict::evaluate_choice(
                    &c.answer,
                    &c.question.mcq_correct,
                    self.scores.quiz,
                ),
            });

        let result = SubmissionResult {
            id,
            candidate_id: submission.candidate_id.clone(),
            rust: self.language_result(Language::Rust, rust),
            typescript: self.language_result(Language::TypeScript, typescript),
            quiz,
            custom,
            submitted_at: submission.submitted_at,
            created_at: Utc::now(),
        };

        info!(
            rust_score = result.rust.score(),
            typescript_score = result.typescript.score(),
            quiz_score = result.quiz.verdict.score,
            rust_degraded = result.rust.outcome.is_degraded(),
            typescript_degraded = result.typescript.outcome.is_degraded(),
            "Submission evaluated"
        );

        if let Err(e) = self.store.record(result.clone()).await {
            error!(error = %e, "Failed to record submission result");
        }

        Ok(result)
    }

    fn spawn_language(
        &self,
        submission: &Submission,
        language: Language,
    ) -> AbortOnDropHandle<RetryOutcome> {
        let controller = RetryController::new(self.client.clone(), self.policy);
        let request = submission.execution_request(language);
        AbortOnDropHandle::new(tokio::spawn(async move {
            controller.execute(&request).await
        }))
    }

    fn language_result(
        &self,
        language: Language,
        settled: Result<RetryOutcome, DegradedReason>,
    ) -> LanguageResult {
        let scores = self.scores.language(language);
        match settled {
            Ok(outcome) => LanguageResult {
                language,
                time_ms: outcome.elapsed_ms(),
                outcome: verdict::evaluate(&outcome, EXPECTED_OUTPUT, scores),
            },
            Err(reason) => LanguageResult {
                language,
                time_ms: 0.0,
                outcome: verdict::degraded(reason, scores),
            },
        }
    }
}

/// Wait for one language task, bounded by the shared deadline.
///
/// Dropping the handle on timeout aborts the task, so no retry loop outlives
/// the submission.
async fn settle(
    language: Language,
    handle: AbortOnDropHandle<RetryOutcome>,
    deadline: Option<Instant>,
) -> Result<RetryOutcome, DegradedReason> {
    let joined = match deadline {
        Some(deadline) => match tokio::time::timeout_at(deadline, handle).await {
            Ok(joined) => joined,
            Err(_) => {
                warn!(%language, "Evaluation deadline exceeded");
                return Err(DegradedReason::DeadlineExceeded);
            }
        },
        None => handle.await,
    };

    joined.map_err(|e| {
        error!(%language, error = %e, "Evaluation task failed");
        DegradedReason::Internal {
            message: e.to_string(),
        }
    })
}
