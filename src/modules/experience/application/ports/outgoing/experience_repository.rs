use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::ExperienceType;
use crate::shared::patch_field::PatchField;

#[derive(Debug, Clone)]
pub struct CreateExperienceData {
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub period: String,
    pub description: Option<String>,
    pub experience_type: ExperienceType,
}

#[derive(Debug, Clone, Default)]
pub struct PatchExperienceData {
    pub title: Option<String>,
    pub company: PatchField<String>,
    pub location: PatchField<String>,
    pub period: Option<String>,
    pub description: PatchField<String>,
    pub experience_type: Option<ExperienceType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ExperienceResult {
    pub id: Uuid,
    #[schema(example = "Software Engineer Intern")]
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    #[schema(example = "Jun 2024 - Aug 2024")]
    pub period: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub experience_type: ExperienceType,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceRepositoryError {
    #[error("Experience not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn create_experience(
        &self,
        data: CreateExperienceData,
    ) -> Result<ExperienceResult, ExperienceRepositoryError>;

    async fn patch_experience(
        &self,
        experience_id: Uuid,
        data: PatchExperienceData,
    ) -> Result<ExperienceResult, ExperienceRepositoryError>;

    async fn delete_experience(&self, experience_id: Uuid)
        -> Result<(), ExperienceRepositoryError>;
}
