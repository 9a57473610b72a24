use async_trait::async_trait;

use crate::modules::experience::application::ports::outgoing::ExperienceResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetExperiencesError {
    #[error("Failed to fetch experience entries: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetExperiencesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ExperienceResult>, GetExperiencesError>;
}
