use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::patch_field::PatchField;

/// Everything needed to create the record when none exists yet.
#[derive(Debug, Clone, Default)]
pub struct NewSettingsData {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub profile_image: Option<String>,
    pub resume_link: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub devpost: Option<String>,
    pub leetcode: Option<String>,
    pub email: Option<String>,
    pub about_description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PatchSettingsData {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub profile_image: PatchField<String>,
    pub resume_link: PatchField<String>,
    pub linkedin: PatchField<String>,
    pub github: PatchField<String>,
    pub devpost: PatchField<String>,
    pub leetcode: PatchField<String>,
    pub email: PatchField<String>,
    pub about_description: PatchField<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResult {
    pub id: Uuid,
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "AI & Data Science Student")]
    pub title: String,
    pub bio: String,
    pub profile_image: Option<String>,
    pub resume_link: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub devpost: Option<String>,
    pub leetcode: Option<String>,
    pub email: Option<String>,
    pub about_description: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsRepositoryError {
    #[error("Settings not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// The single settings record, if one has been created.
    async fn find_settings(&self) -> Result<Option<SettingsResult>, SettingsRepositoryError>;

    async fn insert_settings(
        &self,
        data: NewSettingsData,
    ) -> Result<SettingsResult, SettingsRepositoryError>;

    async fn patch_settings(
        &self,
        settings_id: Uuid,
        data: PatchSettingsData,
    ) -> Result<SettingsResult, SettingsRepositoryError>;
}
