use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::coding_profile::application::ports::outgoing::{
    CodingProfileResult, PatchCodingProfileData,
};

#[derive(Debug, Clone)]
pub struct UpdateCodingProfileCommand {
    data: PatchCodingProfileData,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateCodingProfileCommandError {
    #[error("Platform cannot be empty")]
    EmptyPlatform,

    #[error("Username cannot be empty")]
    EmptyUsername,
}

impl UpdateCodingProfileCommand {
    pub fn new(
        mut data: PatchCodingProfileData,
    ) -> Result<Self, UpdateCodingProfileCommandError> {
        if let Some(platform) = data.platform.take() {
            let platform = platform.trim();
            if platform.is_empty() {
                return Err(UpdateCodingProfileCommandError::EmptyPlatform);
            }
            data.platform = Some(platform.to_string());
        }

        if let Some(username) = data.username.take() {
            let username = username.trim();
            if username.is_empty() {
                return Err(UpdateCodingProfileCommandError::EmptyUsername);
            }
            data.username = Some(username.to_string());
        }

        Ok(Self { data })
    }

    pub fn into_patch(self) -> PatchCodingProfileData {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCodingProfileError {
    #[error("Coding profile not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateCodingProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        profile_id: Uuid,
        command: UpdateCodingProfileCommand,
    ) -> Result<CodingProfileResult, UpdateCodingProfileError>;
}
