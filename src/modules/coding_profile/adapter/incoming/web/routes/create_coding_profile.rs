use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::coding_profile::application::domain::entities::ProfileStat;
use crate::modules::coding_profile::application::ports::incoming::use_cases::{
    CreateCodingProfileCommand, CreateCodingProfileCommandError, CreateCodingProfileError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCodingProfileRequest {
    #[schema(example = "LeetCode")]
    pub platform: String,
    #[schema(example = "octocat")]
    pub username: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub stats: Vec<ProfileStat>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/portfolio/profiles")]
pub async fn create_coding_profile_handler(
    _admin: AdminUser,
    req: web::Json<CreateCodingProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match CreateCodingProfileCommand::new(
        req.platform,
        req.username,
        req.description,
        req.icon,
        req.color,
        req.link,
        req.stats,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    match data.coding_profile.create.execute(command).await {
        Ok(profile) => {
            info!(profile_id = %profile.id, platform = %profile.platform, "Coding profile created");
            ApiResponse::success(profile)
        }
        Err(CreateCodingProfileError::RepositoryError(e)) => {
            error!("Repository error creating coding profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}

fn map_command_error(e: CreateCodingProfileCommandError) -> HttpResponse {
    match e {
        CreateCodingProfileCommandError::EmptyPlatform => {
            ApiResponse::bad_request("EMPTY_PLATFORM", "Platform cannot be empty")
        }
        CreateCodingProfileCommandError::EmptyUsername => {
            ApiResponse::bad_request("EMPTY_USERNAME", "Username cannot be empty")
        }
    }
}
