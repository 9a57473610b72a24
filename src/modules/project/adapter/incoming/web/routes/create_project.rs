use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectCommand, CreateProjectCommandError, CreateProjectError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProjectRequest {
    #[schema(example = "Weather Prediction Web App")]
    pub title: String,
    pub description: String,
    #[serde(default)]
    #[schema(example = json!(["Python", "ML", "API"]))]
    pub tech: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub live: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/portfolio/projects")]
pub async fn create_project_handler(
    _admin: AdminUser,
    req: web::Json<CreateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match CreateProjectCommand::new(
        req.title,
        req.description,
        req.tech,
        req.github,
        req.live,
        req.image,
        req.icon,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    match data.project.create.execute(command).await {
        Ok(project) => {
            info!(project_id = %project.id, title = %project.title, "Project created");
            ApiResponse::success(project)
        }
        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Repository error creating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(e: CreateProjectCommandError) -> HttpResponse {
    match e {
        CreateProjectCommandError::EmptyTitle => {
            ApiResponse::bad_request("EMPTY_TITLE", "Title cannot be empty")
        }
        CreateProjectCommandError::EmptyDescription => {
            ApiResponse::bad_request("EMPTY_DESCRIPTION", "Description cannot be empty")
        }
    }
}
