use common::SubmissionResult;
use evaluator::DashboardMetrics;
use serde::Serialize;

/// Dashboard feed: aggregate metrics plus the most recent submissions.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ResultsResponse {
    #[schema(example = 12)]
    pub total_submissions: usize,
    /// Percentage of submissions with a correct Rust solution.
    #[schema(example = 75.0)]
    pub rust_success_rate: f64,
    #[schema(example = 66.7)]
    pub typescript_success_rate: f64,
    #[schema(example = 83.3)]
    pub quiz_success_rate: f64,
    /// Mean sandbox time in milliseconds.
    #[schema(example = 412.5)]
    pub avg_rust_time: f64,
    #[schema(example = 238.1)]
    pub avg_typescript_time: f64,
    #[schema(example = 3)]
    pub total_rust_wrong: u32,
    #[schema(example = 4)]
    pub total_typescript_wrong: u32,
    /// Most recent first.
    pub submissions: Vec<SubmissionResult>,
}

impl From<DashboardMetrics> for ResultsResponse {
    fn from(m: DashboardMetrics) -> Self {
        Self {
            total_submissions: m.total_submissions,
            rust_success_rate: m.rust_success_rate,
            typescript_success_rate: m.typescript_success_rate,
            quiz_success_rate: m.quiz_success_rate,
            avg_rust_time: m.avg_rust_time,
            avg_typescript_time: m.avg_typescript_time,
            total_rust_wrong: m.total_rust_wrong,
            total_typescript_wrong: m.total_typescript_wrong,
            submissions: m.recent,
        }
    }
}
