use async_trait::async_trait;

use crate::modules::coding_profile::application::ports::outgoing::CodingProfileResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCodingProfilesError {
    #[error("Failed to fetch coding profiles: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetCodingProfilesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CodingProfileResult>, GetCodingProfilesError>;
}
