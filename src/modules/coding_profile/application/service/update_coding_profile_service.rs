use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::coding_profile::application::ports::{
    incoming::use_cases::{
        UpdateCodingProfileCommand, UpdateCodingProfileError, UpdateCodingProfileUseCase,
    },
    outgoing::{CodingProfileRepository, CodingProfileRepositoryError, CodingProfileResult},
};

#[derive(Debug, Clone)]
pub struct UpdateCodingProfileService<R>
where
    R: CodingProfileRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateCodingProfileService<R>
where
    R: CodingProfileRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateCodingProfileUseCase for UpdateCodingProfileService<R>
where
    R: CodingProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        profile_id: Uuid,
        command: UpdateCodingProfileCommand,
    ) -> Result<CodingProfileResult, UpdateCodingProfileError> {
        self.repository
            .patch_coding_profile(profile_id, command.into_patch())
            .await
            .map_err(|e| match e {
                CodingProfileRepositoryError::NotFound => UpdateCodingProfileError::NotFound,
                other => UpdateCodingProfileError::RepositoryError(other.to_string()),
            })
    }
}
