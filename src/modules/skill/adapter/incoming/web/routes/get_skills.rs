use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::skill::application::ports::incoming::use_cases::GetSkillsError;
use crate::modules::skill::application::ports::outgoing::SkillResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List skills
///
/// Public. Ordered by category.
#[utoipa::path(
    get,
    path = "/api/portfolio/skills",
    tag = "portfolio",
    responses(
        (status = 200, description = "All skills", body = Vec<SkillResult>),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/portfolio/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skill.list.execute().await {
        Ok(skills) => ApiResponse::success(skills),

        Err(GetSkillsError::QueryFailed(msg)) => {
            error!("Failed to list skills: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
