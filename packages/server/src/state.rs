use std::sync::Arc;

use evaluator::{Orchestrator, ResultsStore, SandboxClient};

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
    pub store: Arc<dyn ResultsStore>,
    pub config: AppConfig,
}

impl AppState {
    /// Wire the evaluation pipeline from its two collaborators.
    pub fn new(
        config: AppConfig,
        sandbox: Arc<dyn SandboxClient>,
        store: Arc<dyn ResultsStore>,
    ) -> Self {
        let orchestrator = Orchestrator::new(sandbox, store.clone())
            .with_retry_policy(config.retry.policy())
            .with_deadline(config.evaluation.deadline());
        Self {
            orchestrator: Arc::new(orchestrator),
            store,
            config,
        }
    }
}
