use actix_web::{put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::project::application::ports::incoming::use_cases::{
    UpdateProjectCommand, UpdateProjectCommandError, UpdateProjectError,
};
use crate::modules::project::application::ports::outgoing::PatchProjectData;
use crate::shared::api::ApiResponse;
use crate::shared::patch_field::PatchField;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Omitted fields keep their stored value. `null` clears the link and
/// media fields; `tech` replaces the whole list when present.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tech: Option<Vec<String>>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub github: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub live: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub image: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub icon: PatchField<String>,
}

impl From<UpdateProjectRequest> for PatchProjectData {
    fn from(req: UpdateProjectRequest) -> Self {
        PatchProjectData {
            title: req.title,
            description: req.description,
            tech: req.tech,
            github: req.github,
            live: req.live,
            image: req.image,
            icon: req.icon,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[put("/api/portfolio/projects/{id}")]
pub async fn update_project_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    let command = match UpdateProjectCommand::new(req.into_inner().into()) {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    match data.project.update.execute(project_id, command).await {
        Ok(project) => {
            info!(project_id = %project_id, "Project updated");
            ApiResponse::success(project)
        }
        Err(e) => map_update_error(project_id, e),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(e: UpdateProjectCommandError) -> HttpResponse {
    match e {
        UpdateProjectCommandError::EmptyTitle => {
            ApiResponse::bad_request("EMPTY_TITLE", "Title cannot be empty")
        }
        UpdateProjectCommandError::EmptyDescription => {
            ApiResponse::bad_request("EMPTY_DESCRIPTION", "Description cannot be empty")
        }
    }
}

fn map_update_error(project_id: Uuid, e: UpdateProjectError) -> HttpResponse {
    match e {
        UpdateProjectError::NotFound => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        UpdateProjectError::RepositoryError(msg) => {
            error!("Repository error updating project {}: {}", project_id, msg);
            ApiResponse::internal_error()
        }
    }
}
