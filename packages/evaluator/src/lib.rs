pub mod error;
pub mod metrics;
pub mod orchestrator;
pub mod retry;
pub mod sandbox;
pub mod store;
pub mod verdict;

pub use error::{EvaluationError, SandboxError, StoreError};
pub use metrics::DashboardMetrics;
pub use orchestrator::Orchestrator;
pub use retry::{RetryController, RetryOutcome, RetryState};
pub use sandbox::piston::PistonClient;
pub use sandbox::{ExecutionOutcome, SandboxClient};
pub use store::{InMemoryResultsStore, ResultsStore};
