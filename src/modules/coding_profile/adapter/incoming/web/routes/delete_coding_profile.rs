use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::coding_profile::application::ports::incoming::use_cases::DeleteCodingProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/portfolio/profiles/{id}")]
pub async fn delete_coding_profile_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let profile_id = path.into_inner();

    match data.coding_profile.delete.execute(profile_id).await {
        Ok(()) => {
            info!(profile_id = %profile_id, "Coding profile removed");
            ApiResponse::message("Profile removed")
        }
        Err(DeleteCodingProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }
        Err(DeleteCodingProfileError::RepositoryError(e)) => {
            error!(
                "Repository error deleting coding profile {}: {}",
                profile_id, e
            );
            ApiResponse::internal_error()
        }
    }
}
