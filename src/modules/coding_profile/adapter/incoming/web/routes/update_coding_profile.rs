use actix_web::{put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::coding_profile::application::domain::entities::ProfileStat;
use crate::modules::coding_profile::application::ports::incoming::use_cases::{
    UpdateCodingProfileCommand, UpdateCodingProfileCommandError, UpdateCodingProfileError,
};
use crate::modules::coding_profile::application::ports::outgoing::PatchCodingProfileData;
use crate::shared::api::ApiResponse;
use crate::shared::patch_field::PatchField;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCodingProfileRequest {
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub icon: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub color: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub link: PatchField<String>,
    #[serde(default)]
    pub stats: Option<Vec<ProfileStat>>,
}

impl From<UpdateCodingProfileRequest> for PatchCodingProfileData {
    fn from(req: UpdateCodingProfileRequest) -> Self {
        PatchCodingProfileData {
            platform: req.platform,
            username: req.username,
            description: req.description,
            icon: req.icon,
            color: req.color,
            link: req.link,
            stats: req.stats,
        }
    }
}

#[put("/api/portfolio/profiles/{id}")]
pub async fn update_coding_profile_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateCodingProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let profile_id = path.into_inner();

    let command = match UpdateCodingProfileCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    match data.coding_profile.update.execute(profile_id, command).await {
        Ok(profile) => {
            info!(profile_id = %profile_id, "Coding profile updated");
            ApiResponse::success(profile)
        }
        Err(UpdateCodingProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }
        Err(UpdateCodingProfileError::RepositoryError(e)) => {
            error!(
                "Repository error updating coding profile {}: {}",
                profile_id, e
            );
            ApiResponse::internal_error()
        }
    }
}

fn map_command_error(e: UpdateCodingProfileCommandError) -> HttpResponse {
    match e {
        UpdateCodingProfileCommandError::EmptyPlatform => {
            ApiResponse::bad_request("EMPTY_PLATFORM", "Platform cannot be empty")
        }
        UpdateCodingProfileCommandError::EmptyUsername => {
            ApiResponse::bad_request("EMPTY_USERNAME", "Username cannot be empty")
        }
    }
}
