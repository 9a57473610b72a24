use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::ports::outgoing::{
    ExperienceResult, PatchExperienceData,
};

//
// ──────────────────────────────────────────────────────────
// Update Experience Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateExperienceCommand {
    data: PatchExperienceData,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateExperienceCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Period cannot be empty")]
    EmptyPeriod,
}

impl UpdateExperienceCommand {
    /// Title and period may be replaced but never blanked.
    pub fn new(mut data: PatchExperienceData) -> Result<Self, UpdateExperienceCommandError> {
        if let Some(title) = data.title.take() {
            let title = title.trim();
            if title.is_empty() {
                return Err(UpdateExperienceCommandError::EmptyTitle);
            }
            data.title = Some(title.to_string());
        }

        if let Some(period) = data.period.take() {
            let period = period.trim();
            if period.is_empty() {
                return Err(UpdateExperienceCommandError::EmptyPeriod);
            }
            data.period = Some(period.to_string());
        }

        Ok(Self { data })
    }

    pub fn into_patch(self) -> PatchExperienceData {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateExperienceError {
    #[error("Experience not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        experience_id: Uuid,
        command: UpdateExperienceCommand,
    ) -> Result<ExperienceResult, UpdateExperienceError>;
}
