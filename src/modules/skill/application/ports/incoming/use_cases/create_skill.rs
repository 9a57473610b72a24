use async_trait::async_trait;

use crate::modules::skill::application::ports::outgoing::SkillResult;

//
// ──────────────────────────────────────────────────────────
// Create Skill Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateSkillCommand {
    name: String,
    level: i32,
    category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateSkillCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Category cannot be empty")]
    EmptyCategory,
}

impl CreateSkillCommand {
    pub fn new(
        name: String,
        level: i32,
        category: String,
    ) -> Result<Self, CreateSkillCommandError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CreateSkillCommandError::EmptyName);
        }

        let category = category.trim();
        if category.is_empty() {
            return Err(CreateSkillCommandError::EmptyCategory);
        }

        Ok(Self {
            name: name.to_string(),
            level,
            category: category.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateSkillError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateSkillUseCase: Send + Sync {
    async fn execute(&self, command: CreateSkillCommand) -> Result<SkillResult, CreateSkillError>;
}
