use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillCommand, CreateSkillCommandError, CreateSkillError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSkillRequest {
    #[schema(example = "Rust")]
    pub name: String,
    #[schema(example = 70)]
    pub level: i32,
    #[schema(example = "Programming")]
    pub category: String,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/portfolio/skills")]
pub async fn create_skill_handler(
    _admin: AdminUser,
    req: web::Json<CreateSkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match CreateSkillCommand::new(req.name, req.level, req.category) {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    match data.skill.create.execute(command).await {
        Ok(skill) => {
            info!(skill_id = %skill.id, "Skill created");
            ApiResponse::success(skill)
        }
        Err(CreateSkillError::RepositoryError(e)) => {
            error!("Repository error creating skill: {}", e);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(e: CreateSkillCommandError) -> HttpResponse {
    match e {
        CreateSkillCommandError::EmptyName => {
            ApiResponse::bad_request("EMPTY_NAME", "Name cannot be empty")
        }
        CreateSkillCommandError::EmptyCategory => {
            ApiResponse::bad_request("EMPTY_CATEGORY", "Category cannot be empty")
        }
    }
}
