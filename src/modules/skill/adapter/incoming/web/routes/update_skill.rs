use actix_web::{put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::skill::application::ports::incoming::use_cases::{
    UpdateSkillCommand, UpdateSkillCommandError, UpdateSkillError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Omitted (or null) fields keep their stored value.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateSkillRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub level: Option<i32>,
    #[serde(default)]
    pub category: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[put("/api/portfolio/skills/{id}")]
pub async fn update_skill_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateSkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let skill_id = path.into_inner();
    let req = req.into_inner();

    let command = match UpdateSkillCommand::new(req.name, req.level, req.category) {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    match data.skill.update.execute(skill_id, command).await {
        Ok(skill) => {
            info!(skill_id = %skill_id, "Skill updated");
            ApiResponse::success(skill)
        }
        Err(e) => map_update_error(skill_id, e),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(e: UpdateSkillCommandError) -> HttpResponse {
    match e {
        UpdateSkillCommandError::EmptyName => {
            ApiResponse::bad_request("EMPTY_NAME", "Name cannot be empty")
        }
        UpdateSkillCommandError::EmptyCategory => {
            ApiResponse::bad_request("EMPTY_CATEGORY", "Category cannot be empty")
        }
    }
}

fn map_update_error(skill_id: Uuid, e: UpdateSkillError) -> HttpResponse {
    match e {
        UpdateSkillError::NotFound => ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found"),
        UpdateSkillError::RepositoryError(msg) => {
            error!("Repository error updating skill {}: {}", skill_id, msg);
            ApiResponse::internal_error()
        }
    }
}
