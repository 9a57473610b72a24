use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::ports::{
    incoming::use_cases::{UpdateSkillCommand, UpdateSkillError, UpdateSkillUseCase},
    outgoing::{SkillRepository, SkillRepositoryError, SkillResult},
};

#[derive(Debug, Clone)]
pub struct UpdateSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateSkillUseCase for UpdateSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(
        &self,
        skill_id: Uuid,
        command: UpdateSkillCommand,
    ) -> Result<SkillResult, UpdateSkillError> {
        self.repository
            .patch_skill(skill_id, command.into_patch())
            .await
            .map_err(|e| match e {
                SkillRepositoryError::NotFound => UpdateSkillError::NotFound,
                other => UpdateSkillError::RepositoryError(other.to_string()),
            })
    }
}
