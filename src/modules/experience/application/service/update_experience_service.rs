use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::ports::{
    incoming::use_cases::{
        UpdateExperienceCommand, UpdateExperienceError, UpdateExperienceUseCase,
    },
    outgoing::{ExperienceRepository, ExperienceRepositoryError, ExperienceResult},
};

#[derive(Debug, Clone)]
pub struct UpdateExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateExperienceUseCase for UpdateExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(
        &self,
        experience_id: Uuid,
        command: UpdateExperienceCommand,
    ) -> Result<ExperienceResult, UpdateExperienceError> {
        self.repository
            .patch_experience(experience_id, command.into_patch())
            .await
            .map_err(|e| match e {
                ExperienceRepositoryError::NotFound => UpdateExperienceError::NotFound,
                other => UpdateExperienceError::RepositoryError(other.to_string()),
            })
    }
}
