use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateSkillData {
    pub name: String,
    pub level: i32,
    pub category: String,
}

/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct PatchSkillData {
    pub name: Option<String>,
    pub level: Option<i32>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SkillResult {
    pub id: Uuid,
    #[schema(example = "Rust")]
    pub name: String,
    #[schema(example = 70)]
    pub level: i32,
    #[schema(example = "Programming")]
    pub category: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Skill not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn create_skill(&self, data: CreateSkillData)
        -> Result<SkillResult, SkillRepositoryError>;

    async fn patch_skill(
        &self,
        skill_id: Uuid,
        data: PatchSkillData,
    ) -> Result<SkillResult, SkillRepositoryError>;

    async fn delete_skill(&self, skill_id: Uuid) -> Result<(), SkillRepositoryError>;
}
