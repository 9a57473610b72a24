use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::ProjectResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectsError {
    #[error("Failed to fetch projects: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProjectResult>, GetProjectsError>;
}
