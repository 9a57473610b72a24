use async_trait::async_trait;

use crate::modules::coding_profile::application::domain::entities::ProfileStat;
use crate::modules::coding_profile::application::ports::outgoing::{
    CodingProfileResult, CreateCodingProfileData,
};

//
// ──────────────────────────────────────────────────────────
// Create Coding Profile Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateCodingProfileCommand {
    data: CreateCodingProfileData,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateCodingProfileCommandError {
    #[error("Platform cannot be empty")]
    EmptyPlatform,

    #[error("Username cannot be empty")]
    EmptyUsername,
}

impl CreateCodingProfileCommand {
    pub fn new(
        platform: String,
        username: String,
        description: Option<String>,
        icon: Option<String>,
        color: Option<String>,
        link: Option<String>,
        stats: Vec<ProfileStat>,
    ) -> Result<Self, CreateCodingProfileCommandError> {
        let platform = platform.trim();
        if platform.is_empty() {
            return Err(CreateCodingProfileCommandError::EmptyPlatform);
        }

        let username = username.trim();
        if username.is_empty() {
            return Err(CreateCodingProfileCommandError::EmptyUsername);
        }

        Ok(Self {
            data: CreateCodingProfileData {
                platform: platform.to_string(),
                username: username.to_string(),
                description,
                icon,
                color,
                link,
                stats,
            },
        })
    }

    pub fn platform(&self) -> &str {
        &self.data.platform
    }

    pub fn username(&self) -> &str {
        &self.data.username
    }

    pub fn into_data(self) -> CreateCodingProfileData {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCodingProfileError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCodingProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateCodingProfileCommand,
    ) -> Result<CodingProfileResult, CreateCodingProfileError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(
        platform: &str,
        username: &str,
    ) -> Result<CreateCodingProfileCommand, CreateCodingProfileCommandError> {
        CreateCodingProfileCommand::new(
            platform.to_string(),
            username.to_string(),
            None,
            None,
            None,
            None,
            vec![],
        )
    }

    #[test]
    fn trims_platform_and_username() {
        let cmd = build(" GitHub ", " octocat ").unwrap();

        assert_eq!(cmd.platform(), "GitHub");
        assert_eq!(cmd.username(), "octocat");
        assert!(cmd.into_data().stats.is_empty());
    }

    #[test]
    fn rejects_blank_required_fields() {
        assert_eq!(
            build("", "octocat").unwrap_err(),
            CreateCodingProfileCommandError::EmptyPlatform
        );
        assert_eq!(
            build("GitHub", "\t").unwrap_err(),
            CreateCodingProfileCommandError::EmptyUsername
        );
    }
}
