use axum::Json;
use axum::extract::State;
use evaluator::DashboardMetrics;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::models::results::ResultsResponse;
use crate::state::AppState;

/// Dashboard metrics over every recorded submission.
#[utoipa::path(
    get,
    path = "/",
    tag = "Results",
    operation_id = "getResults",
    summary = "Get dashboard metrics",
    description = "Returns success rates, average sandbox times and wrong-answer totals over all recorded submissions, plus the most recent submissions.",
    responses(
        (status = 200, description = "Dashboard metrics", body = ResultsResponse),
        (status = 500, description = "Results store unavailable (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_results(State(state): State<AppState>) -> Result<Json<ResultsResponse>, AppError> {
    let results = state.store.results().await?;
    let metrics = DashboardMetrics::from_results(&results, state.config.results.recent_limit);
    Ok(Json(metrics.into()))
}
