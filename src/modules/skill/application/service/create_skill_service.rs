use async_trait::async_trait;

use crate::modules::skill::application::ports::{
    incoming::use_cases::{CreateSkillCommand, CreateSkillError, CreateSkillUseCase},
    outgoing::{CreateSkillData, SkillRepository, SkillResult},
};

#[derive(Debug, Clone)]
pub struct CreateSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateSkillUseCase for CreateSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, command: CreateSkillCommand) -> Result<SkillResult, CreateSkillError> {
        let data = CreateSkillData {
            name: command.name().to_string(),
            level: command.level(),
            category: command.category().to_string(),
        };

        self.repository
            .create_skill(data)
            .await
            .map_err(|e| CreateSkillError::RepositoryError(e.to_string()))
    }
}
