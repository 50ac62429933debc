use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::SubmissionResult;
use tracing::{info, instrument, warn};

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::submission::CreateSubmissionRequest;
use crate::state::AppState;

/// Submit and evaluate a candidate's answers.
#[utoipa::path(
    post,
    path = "/",
    tag = "Submissions",
    operation_id = "createSubmission",
    summary = "Submit and evaluate a candidate's answers",
    description = "Runs both solutions in the sandbox, scores them together with the quiz answers, records the result and returns it. A language the sandbox could not evaluate is reported as degraded with the failure score; it does not fail the request.",
    request_body = CreateSubmissionRequest,
    responses(
        (status = 201, description = "Submission evaluated", body = SubmissionResult),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn create_submission(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateSubmissionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let custom = if payload.custom_answer.is_some() {
        match state.store.custom_question().await {
            Ok(question) => question,
            Err(e) => {
                warn!(error = %e, "Failed to read custom question, evaluating without it");
                None
            }
        }
    } else {
        None
    };
    let submission = payload.into_submission(custom);

    let result = state.orchestrator.evaluate_submission(&submission).await?;
    info!(submission_id = %result.id, "Submission accepted");

    Ok((StatusCode::CREATED, Json(result)))
}
