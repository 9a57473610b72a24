use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::experience::application::domain::entities::ExperienceType;
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceCommand, CreateExperienceCommandError, CreateExperienceError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateExperienceRequest {
    #[schema(example = "Software Engineer Intern")]
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[schema(example = "Jun 2024 - Aug 2024")]
    pub period: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Defaults to `work`.
    #[serde(rename = "type", default)]
    pub experience_type: Option<ExperienceType>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/portfolio/experience")]
pub async fn create_experience_handler(
    _admin: AdminUser,
    req: web::Json<CreateExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match CreateExperienceCommand::new(
        req.title,
        req.company,
        req.location,
        req.period,
        req.description,
        req.experience_type,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    match data.experience.create.execute(command).await {
        Ok(entry) => {
            info!(experience_id = %entry.id, kind = %entry.experience_type, "Experience created");
            ApiResponse::success(entry)
        }
        Err(CreateExperienceError::RepositoryError(e)) => {
            error!("Repository error creating experience: {}", e);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(e: CreateExperienceCommandError) -> HttpResponse {
    match e {
        CreateExperienceCommandError::EmptyTitle => {
            ApiResponse::bad_request("EMPTY_TITLE", "Title cannot be empty")
        }
        CreateExperienceCommandError::EmptyPeriod => {
            ApiResponse::bad_request("EMPTY_PERIOD", "Period cannot be empty")
        }
    }
}
