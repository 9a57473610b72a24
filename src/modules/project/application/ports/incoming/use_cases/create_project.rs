use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::{CreateProjectData, ProjectResult};

//
// ──────────────────────────────────────────────────────────
// Create Project Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateProjectCommand {
    data: CreateProjectData,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateProjectCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Description cannot be empty")]
    EmptyDescription,
}

impl CreateProjectCommand {
    pub fn new(
        title: String,
        description: String,
        tech: Vec<String>,
        github: Option<String>,
        live: Option<String>,
        image: Option<String>,
        icon: Option<String>,
    ) -> Result<Self, CreateProjectCommandError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CreateProjectCommandError::EmptyTitle);
        }

        let description = description.trim();
        if description.is_empty() {
            return Err(CreateProjectCommandError::EmptyDescription);
        }

        Ok(Self {
            data: CreateProjectData {
                title: title.to_string(),
                description: description.to_string(),
                tech,
                github,
                live,
                image,
                icon,
            },
        })
    }

    pub fn title(&self) -> &str {
        &self.data.title
    }

    pub fn tech(&self) -> &[String] {
        &self.data.tech
    }

    pub fn into_data(self) -> CreateProjectData {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateProjectCommand,
    ) -> Result<ProjectResult, CreateProjectError>;
}
