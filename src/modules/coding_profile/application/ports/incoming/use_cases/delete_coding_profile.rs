use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCodingProfileError {
    #[error("Coding profile not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteCodingProfileUseCase: Send + Sync {
    async fn execute(&self, profile_id: Uuid) -> Result<(), DeleteCodingProfileError>;
}
