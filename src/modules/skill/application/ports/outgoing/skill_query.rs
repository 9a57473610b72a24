use async_trait::async_trait;

use super::skill_repository::SkillResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SkillQuery: Send + Sync {
    /// All skills, ordered by category ascending.
    async fn list_skills(&self) -> Result<Vec<SkillResult>, SkillQueryError>;
}
