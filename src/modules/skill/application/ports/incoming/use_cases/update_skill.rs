use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::ports::outgoing::{PatchSkillData, SkillResult};

//
// ──────────────────────────────────────────────────────────
// Update Skill Command
// ──────────────────────────────────────────────────────────
//

/// Merge update: omitted fields keep their stored values, supplied ones
/// must still be valid.
#[derive(Debug, Clone, Default)]
pub struct UpdateSkillCommand {
    data: PatchSkillData,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateSkillCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Category cannot be empty")]
    EmptyCategory,
}

impl UpdateSkillCommand {
    pub fn new(
        name: Option<String>,
        level: Option<i32>,
        category: Option<String>,
    ) -> Result<Self, UpdateSkillCommandError> {
        let name = match name {
            Some(n) if n.trim().is_empty() => return Err(UpdateSkillCommandError::EmptyName),
            Some(n) => Some(n.trim().to_string()),
            None => None,
        };

        let category = match category {
            Some(c) if c.trim().is_empty() => {
                return Err(UpdateSkillCommandError::EmptyCategory)
            }
            Some(c) => Some(c.trim().to_string()),
            None => None,
        };

        Ok(Self {
            data: PatchSkillData {
                name,
                level,
                category,
            },
        })
    }

    pub fn into_patch(self) -> PatchSkillData {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateSkillError {
    #[error("Skill not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateSkillUseCase: Send + Sync {
    async fn execute(
        &self,
        skill_id: Uuid,
        command: UpdateSkillCommand,
    ) -> Result<SkillResult, UpdateSkillError>;
}
