use actix_web::{put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::settings::application::ports::incoming::use_cases::{
    UpsertSettingsCommand, UpsertSettingsCommandError, UpsertSettingsError,
};
use crate::modules::settings::application::ports::outgoing::PatchSettingsData;
use crate::shared::api::ApiResponse;
use crate::shared::patch_field::PatchField;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// `name`, `title` and `bio` are required only when no settings exist yet.
/// Otherwise omitted fields keep their stored value and `null` clears an
/// optional one.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertSettingsRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub profile_image: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub resume_link: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub linkedin: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub github: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub devpost: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub leetcode: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub email: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub about_description: PatchField<String>,
}

impl From<UpsertSettingsRequest> for PatchSettingsData {
    fn from(req: UpsertSettingsRequest) -> Self {
        PatchSettingsData {
            name: req.name,
            title: req.title,
            bio: req.bio,
            profile_image: req.profile_image,
            resume_link: req.resume_link,
            linkedin: req.linkedin,
            github: req.github,
            devpost: req.devpost,
            leetcode: req.leetcode,
            email: req.email,
            about_description: req.about_description,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[put("/api/portfolio/settings")]
pub async fn upsert_settings_handler(
    _admin: AdminUser,
    req: web::Json<UpsertSettingsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match UpsertSettingsCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    match data.settings.upsert.execute(command).await {
        Ok(settings) => {
            info!(settings_id = %settings.id, "Settings saved");
            ApiResponse::success(settings)
        }
        Err(e @ UpsertSettingsError::Incomplete(_)) => {
            ApiResponse::bad_request("SETTINGS_INCOMPLETE", &e.to_string())
        }
        Err(UpsertSettingsError::RepositoryError(msg)) => {
            error!("Repository error saving settings: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(e: UpsertSettingsCommandError) -> HttpResponse {
    match e {
        UpsertSettingsCommandError::EmptyName => {
            ApiResponse::bad_request("EMPTY_NAME", "Name cannot be empty")
        }
        UpsertSettingsCommandError::EmptyTitle => {
            ApiResponse::bad_request("EMPTY_TITLE", "Title cannot be empty")
        }
        UpsertSettingsCommandError::EmptyBio => {
            ApiResponse::bad_request("EMPTY_BIO", "Bio cannot be empty")
        }
    }
}
