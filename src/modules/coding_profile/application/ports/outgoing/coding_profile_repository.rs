use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::coding_profile::application::domain::entities::ProfileStat;
use crate::shared::patch_field::PatchField;

#[derive(Debug, Clone)]
pub struct CreateCodingProfileData {
    pub platform: String,
    pub username: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub link: Option<String>,
    pub stats: Vec<ProfileStat>,
}

#[derive(Debug, Clone, Default)]
pub struct PatchCodingProfileData {
    pub platform: Option<String>,
    pub username: Option<String>,
    pub description: PatchField<String>,
    pub icon: PatchField<String>,
    pub color: PatchField<String>,
    pub link: PatchField<String>,
    /// Replaces the whole list when present.
    pub stats: Option<Vec<ProfileStat>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CodingProfileResult {
    pub id: Uuid,
    #[schema(example = "LeetCode")]
    pub platform: String,
    #[schema(example = "octocat")]
    pub username: String,
    pub description: Option<String>,
    #[schema(example = "Code2")]
    pub icon: Option<String>,
    #[schema(example = "bg-orange-500")]
    pub color: Option<String>,
    pub link: Option<String>,
    pub stats: Vec<ProfileStat>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CodingProfileRepositoryError {
    #[error("Coding profile not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait CodingProfileRepository: Send + Sync {
    async fn create_coding_profile(
        &self,
        data: CreateCodingProfileData,
    ) -> Result<CodingProfileResult, CodingProfileRepositoryError>;

    async fn patch_coding_profile(
        &self,
        profile_id: Uuid,
        data: PatchCodingProfileData,
    ) -> Result<CodingProfileResult, CodingProfileRepositoryError>;

    async fn delete_coding_profile(
        &self,
        profile_id: Uuid,
    ) -> Result<(), CodingProfileRepositoryError>;
}
