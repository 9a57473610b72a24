use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::{PatchProjectData, ProjectResult};

#[derive(Debug, Clone)]
pub struct UpdateProjectCommand {
    data: PatchProjectData,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateProjectCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Description cannot be empty")]
    EmptyDescription,
}

impl UpdateProjectCommand {
    /// Title and description may be replaced but never blanked.
    pub fn new(mut data: PatchProjectData) -> Result<Self, UpdateProjectCommandError> {
        if let Some(title) = data.title.take() {
            let title = title.trim();
            if title.is_empty() {
                return Err(UpdateProjectCommandError::EmptyTitle);
            }
            data.title = Some(title.to_string());
        }

        if let Some(description) = data.description.take() {
            let description = description.trim();
            if description.is_empty() {
                return Err(UpdateProjectCommandError::EmptyDescription);
            }
            data.description = Some(description.to_string());
        }

        Ok(Self { data })
    }

    pub fn into_patch(self) -> PatchProjectData {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: Uuid,
        command: UpdateProjectCommand,
    ) -> Result<ProjectResult, UpdateProjectError>;
}
