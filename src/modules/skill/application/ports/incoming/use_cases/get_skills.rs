use async_trait::async_trait;

use crate::modules::skill::application::ports::outgoing::SkillResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSkillsError {
    #[error("Failed to fetch skills: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SkillResult>, GetSkillsError>;
}
