use actix_web::{put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::experience::application::domain::entities::ExperienceType;
use crate::modules::experience::application::ports::incoming::use_cases::{
    UpdateExperienceCommand, UpdateExperienceCommandError, UpdateExperienceError,
};
use crate::modules::experience::application::ports::outgoing::PatchExperienceData;
use crate::shared::api::ApiResponse;
use crate::shared::patch_field::PatchField;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Omitted fields keep their stored value. `null` clears company,
/// location and description.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateExperienceRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub company: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub location: PatchField<String>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,
    #[serde(rename = "type", default)]
    pub experience_type: Option<ExperienceType>,
}

impl From<UpdateExperienceRequest> for PatchExperienceData {
    fn from(req: UpdateExperienceRequest) -> Self {
        PatchExperienceData {
            title: req.title,
            company: req.company,
            location: req.location,
            period: req.period,
            description: req.description,
            experience_type: req.experience_type,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[put("/api/portfolio/experience/{id}")]
pub async fn update_experience_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let experience_id = path.into_inner();

    let command = match UpdateExperienceCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    match data.experience.update.execute(experience_id, command).await {
        Ok(entry) => {
            info!(experience_id = %experience_id, "Experience updated");
            ApiResponse::success(entry)
        }
        Err(e) => map_update_error(experience_id, e),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(e: UpdateExperienceCommandError) -> HttpResponse {
    match e {
        UpdateExperienceCommandError::EmptyTitle => {
            ApiResponse::bad_request("EMPTY_TITLE", "Title cannot be empty")
        }
        UpdateExperienceCommandError::EmptyPeriod => {
            ApiResponse::bad_request("EMPTY_PERIOD", "Period cannot be empty")
        }
    }
}

fn map_update_error(experience_id: Uuid, e: UpdateExperienceError) -> HttpResponse {
    match e {
        UpdateExperienceError::NotFound => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }
        UpdateExperienceError::RepositoryError(msg) => {
            error!(
                "Repository error updating experience {}: {}",
                experience_id, msg
            );
            ApiResponse::internal_error()
        }
    }
}
