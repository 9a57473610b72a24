use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::skill::application::ports::incoming::use_cases::DeleteSkillError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/portfolio/skills/{id}")]
pub async fn delete_skill_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let skill_id = path.into_inner();

    match data.skill.delete.execute(skill_id).await {
        Ok(()) => {
            info!(skill_id = %skill_id, "Skill removed");
            ApiResponse::message("Skill removed")
        }
        Err(DeleteSkillError::NotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }
        Err(DeleteSkillError::RepositoryError(e)) => {
            error!("Repository error deleting skill {}: {}", skill_id, e);
            ApiResponse::internal_error()
        }
    }
}
