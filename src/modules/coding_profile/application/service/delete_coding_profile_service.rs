use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::coding_profile::application::ports::{
    incoming::use_cases::{DeleteCodingProfileError, DeleteCodingProfileUseCase},
    outgoing::{CodingProfileRepository, CodingProfileRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteCodingProfileService<R>
where
    R: CodingProfileRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteCodingProfileService<R>
where
    R: CodingProfileRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteCodingProfileUseCase for DeleteCodingProfileService<R>
where
    R: CodingProfileRepository + Send + Sync,
{
    async fn execute(&self, profile_id: Uuid) -> Result<(), DeleteCodingProfileError> {
        self.repository
            .delete_coding_profile(profile_id)
            .await
            .map_err(|e| match e {
                CodingProfileRepositoryError::NotFound => DeleteCodingProfileError::NotFound,
                other => DeleteCodingProfileError::RepositoryError(other.to_string()),
            })
    }
}
