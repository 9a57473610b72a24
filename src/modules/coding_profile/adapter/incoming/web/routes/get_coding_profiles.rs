use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::coding_profile::application::ports::incoming::use_cases::GetCodingProfilesError;
use crate::modules::coding_profile::application::ports::outgoing::CodingProfileResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List coding profiles
///
/// Public. Ordered by platform name.
#[utoipa::path(
    get,
    path = "/api/portfolio/profiles",
    tag = "portfolio",
    responses(
        (status = 200, description = "All coding profiles", body = Vec<CodingProfileResult>),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/portfolio/profiles")]
pub async fn get_coding_profiles_handler(data: web::Data<AppState>) -> impl Responder {
    match data.coding_profile.list.execute().await {
        Ok(profiles) => ApiResponse::success(profiles),

        Err(GetCodingProfilesError::QueryFailed(msg)) => {
            error!("Failed to list coding profiles: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
