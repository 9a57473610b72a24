use async_trait::async_trait;

use crate::modules::coding_profile::application::ports::{
    incoming::use_cases::{
        CreateCodingProfileCommand, CreateCodingProfileError, CreateCodingProfileUseCase,
    },
    outgoing::{CodingProfileRepository, CodingProfileResult},
};

#[derive(Debug, Clone)]
pub struct CreateCodingProfileService<R>
where
    R: CodingProfileRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateCodingProfileService<R>
where
    R: CodingProfileRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCodingProfileUseCase for CreateCodingProfileService<R>
where
    R: CodingProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateCodingProfileCommand,
    ) -> Result<CodingProfileResult, CreateCodingProfileError> {
        self.repository
            .create_coding_profile(command.into_data())
            .await
            .map_err(|e| CreateCodingProfileError::RepositoryError(e.to_string()))
    }
}
