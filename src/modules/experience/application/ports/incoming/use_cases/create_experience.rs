use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::ExperienceType;
use crate::modules::experience::application::ports::outgoing::ExperienceResult;

//
// ──────────────────────────────────────────────────────────
// Create Experience Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateExperienceCommand {
    title: String,
    company: Option<String>,
    location: Option<String>,
    period: String,
    description: Option<String>,
    experience_type: ExperienceType,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateExperienceCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Period cannot be empty")]
    EmptyPeriod,
}

impl CreateExperienceCommand {
    pub fn new(
        title: String,
        company: Option<String>,
        location: Option<String>,
        period: String,
        description: Option<String>,
        experience_type: Option<ExperienceType>,
    ) -> Result<Self, CreateExperienceCommandError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CreateExperienceCommandError::EmptyTitle);
        }

        let period = period.trim();
        if period.is_empty() {
            return Err(CreateExperienceCommandError::EmptyPeriod);
        }

        Ok(Self {
            title: title.to_string(),
            company,
            location,
            period: period.to_string(),
            description,
            experience_type: experience_type.unwrap_or_default(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn company(&self) -> Option<&String> {
        self.company.as_ref()
    }

    pub fn location(&self) -> Option<&String> {
        self.location.as_ref()
    }

    pub fn period(&self) -> &str {
        &self.period
    }

    pub fn description(&self) -> Option<&String> {
        self.description.as_ref()
    }

    pub fn experience_type(&self) -> ExperienceType {
        self.experience_type
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateExperienceError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateExperienceCommand,
    ) -> Result<ExperienceResult, CreateExperienceError>;
}
