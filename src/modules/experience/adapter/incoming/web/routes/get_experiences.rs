use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::experience::application::ports::incoming::use_cases::GetExperiencesError;
use crate::modules::experience::application::ports::outgoing::ExperienceResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List timeline entries
///
/// Public. Newest period label first.
#[utoipa::path(
    get,
    path = "/api/portfolio/experience",
    tag = "portfolio",
    responses(
        (status = 200, description = "All experience entries", body = Vec<ExperienceResult>),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/portfolio/experience")]
pub async fn get_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    match data.experience.list.execute().await {
        Ok(entries) => ApiResponse::success(entries),

        Err(GetExperiencesError::QueryFailed(msg)) => {
            error!("Failed to list experience entries: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
