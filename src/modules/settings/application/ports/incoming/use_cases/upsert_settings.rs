use async_trait::async_trait;

use crate::modules::settings::application::ports::outgoing::{
    NewSettingsData, PatchSettingsData, SettingsResult,
};

//
// ──────────────────────────────────────────────────────────
// Upsert Settings Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpsertSettingsCommand {
    data: PatchSettingsData,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpsertSettingsCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Bio cannot be empty")]
    EmptyBio,
}

impl UpsertSettingsCommand {
    /// Supplied name, title and bio are trimmed and must not be blank.
    pub fn new(mut data: PatchSettingsData) -> Result<Self, UpsertSettingsCommandError> {
        data.name = non_blank(data.name.take(), UpsertSettingsCommandError::EmptyName)?;
        data.title = non_blank(data.title.take(), UpsertSettingsCommandError::EmptyTitle)?;
        data.bio = non_blank(data.bio.take(), UpsertSettingsCommandError::EmptyBio)?;

        Ok(Self { data })
    }

    pub fn into_patch(self) -> PatchSettingsData {
        self.data
    }

    /// Builds the initial record. Fails with the names of the required
    /// fields the command does not carry.
    pub fn into_new(self) -> Result<NewSettingsData, Vec<&'static str>> {
        let data = self.data;

        let missing: Vec<&'static str> = [
            ("name", data.name.is_none()),
            ("title", data.title.is_none()),
            ("bio", data.bio.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, absent)| absent.then_some(field))
        .collect();

        match (data.name, data.title, data.bio) {
            (Some(name), Some(title), Some(bio)) => Ok(NewSettingsData {
                name,
                title,
                bio,
                profile_image: data.profile_image.into_option(),
                resume_link: data.resume_link.into_option(),
                linkedin: data.linkedin.into_option(),
                github: data.github.into_option(),
                devpost: data.devpost.into_option(),
                leetcode: data.leetcode.into_option(),
                email: data.email.into_option(),
                about_description: data.about_description.into_option(),
            }),
            _ => Err(missing),
        }
    }
}

fn non_blank(
    value: Option<String>,
    err: UpsertSettingsCommandError,
) -> Result<Option<String>, UpsertSettingsCommandError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(err),
        Some(v) => Ok(Some(v.trim().to_string())),
        None => Ok(None),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpsertSettingsError {
    #[error("Missing required fields for new settings: {}", .0.join(", "))]
    Incomplete(Vec<&'static str>),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpsertSettingsUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpsertSettingsCommand,
    ) -> Result<SettingsResult, UpsertSettingsError>;
}
