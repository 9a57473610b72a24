use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::experience::application::ports::incoming::use_cases::DeleteExperienceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/portfolio/experience/{id}")]
pub async fn delete_experience_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let experience_id = path.into_inner();

    match data.experience.delete.execute(experience_id).await {
        Ok(()) => {
            info!(experience_id = %experience_id, "Experience removed");
            ApiResponse::message("Experience removed")
        }
        Err(DeleteExperienceError::NotFound) => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }
        Err(DeleteExperienceError::RepositoryError(e)) => {
            error!(
                "Repository error deleting experience {}: {}",
                experience_id, e
            );
            ApiResponse::internal_error()
        }
    }
}
