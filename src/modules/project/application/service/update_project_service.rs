use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::{
    incoming::use_cases::{UpdateProjectCommand, UpdateProjectError, UpdateProjectUseCase},
    outgoing::{ProjectRepository, ProjectRepositoryError, ProjectResult},
};

#[derive(Debug, Clone)]
pub struct UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        project_id: Uuid,
        command: UpdateProjectCommand,
    ) -> Result<ProjectResult, UpdateProjectError> {
        self.repository
            .patch_project(project_id, command.into_patch())
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => UpdateProjectError::NotFound,
                other => UpdateProjectError::RepositoryError(other.to_string()),
            })
    }
}
