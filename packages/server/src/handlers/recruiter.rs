use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::CustomQuestion;
use tracing::{info, instrument};

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::recruiter::*;
use crate::state::AppState;

/// Current custom question.
#[utoipa::path(
    get,
    path = "/",
    tag = "Recruiter",
    operation_id = "getCustomQuestion",
    summary = "Get the custom question",
    responses(
        (status = 200, description = "Custom question, if one is set", body = CustomQuestionStatus),
        (status = 500, description = "Results store unavailable (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_custom_question(
    State(state): State<AppState>,
) -> Result<Json<CustomQuestionStatus>, AppError> {
    let question = state.store.custom_question().await?;
    Ok(Json(question.into()))
}

/// Replace the custom question shown to candidates.
#[utoipa::path(
    post,
    path = "/",
    tag = "Recruiter",
    operation_id = "setCustomQuestion",
    summary = "Set the custom question",
    description = "Stores a free-text question and a four-option multiple-choice question. Later submissions that include `custom_answer` are scored against it.",
    request_body = CreateCustomQuestionRequest,
    responses(
        (status = 201, description = "Custom question stored", body = CustomQuestion),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn set_custom_question(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCustomQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_custom_question(&payload)?;

    let question = CustomQuestion::from(payload);
    state.store.set_custom_question(question.clone()).await?;
    info!(question_id = %question.id, "Custom question updated");

    Ok((StatusCode::CREATED, Json(question)))
}
