use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/submissions", submission_routes())
        .nest("/results", results_routes())
        .nest("/recruiter", recruiter_routes())
}

fn submission_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(handlers::submission::create_submission))
}

fn results_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(handlers::results::get_results))
}

fn recruiter_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(
        handlers::recruiter::get_custom_question,
        handlers::recruiter::set_custom_question
    ))
}
