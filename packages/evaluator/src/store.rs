use async_trait::async_trait;
use common::{CustomQuestion, SubmissionResult};
use tokio::sync::RwLock;

use crate::error::StoreError;

/// Persistence for finished evaluations and the recruiter's custom question.
#[async_trait]
pub trait ResultsStore: Send + Sync {
    async fn record(&self, result: SubmissionResult) -> Result<(), StoreError>;

    /// Every recorded result, oldest first.
    async fn results(&self) -> Result<Vec<SubmissionResult>, StoreError>;

    async fn set_custom_question(&self, question: CustomQuestion) -> Result<(), StoreError>;

    /// The most recently saved custom question, if any. Saving replaces it.
    async fn custom_question(&self) -> Result<Option<CustomQuestion>, StoreError>;
}

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryResultsStore {
    results: RwLock<Vec<SubmissionResult>>,
    question: RwLock<Option<CustomQuestion>>,
}

impl InMemoryResultsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResultsStore for InMemoryResultsStore {
    async fn record(&self, result: SubmissionResult) -> Result<(), StoreError> {
        self.results.write().await.push(result);
        Ok(())
    }

    async fn results(&self) -> Result<Vec<SubmissionResult>, StoreError> {
        Ok(self.results.read().await.clone())
    }

    async fn set_custom_question(&self, question: CustomQuestion) -> Result<(), StoreError> {
        *self.question.write().await = Some(question);
        Ok(())
    }

    async fn custom_question(&self) -> Result<Option<CustomQuestion>, StoreError> {
        Ok(self.question.read().await.clone())
    }
}
