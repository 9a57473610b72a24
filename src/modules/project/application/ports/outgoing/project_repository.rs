use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::patch_field::PatchField;

#[derive(Debug, Clone)]
pub struct CreateProjectData {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub github: Option<String>,
    pub live: Option<String>,
    pub image: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PatchProjectData {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Replaces the whole list when present.
    pub tech: Option<Vec<String>>,
    pub github: PatchField<String>,
    pub live: PatchField<String>,
    pub image: PatchField<String>,
    pub icon: PatchField<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProjectResult {
    pub id: Uuid,
    #[schema(example = "Weather Prediction Web App")]
    pub title: String,
    pub description: String,
    #[schema(example = json!(["Python", "ML", "API"]))]
    pub tech: Vec<String>,
    pub github: Option<String>,
    pub live: Option<String>,
    pub image: Option<String>,
    #[schema(example = "CloudSun")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError>;

    async fn patch_project(
        &self,
        project_id: Uuid,
        data: PatchProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError>;

    async fn delete_project(&self, project_id: Uuid) -> Result<(), ProjectRepositoryError>;
}
