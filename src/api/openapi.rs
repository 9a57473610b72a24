use crate::api::schemas::{ErrorResponse, RemovedResponse};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::extractors::auth::AUTH_TOKEN_HEADER;
use crate::auth::adapter::incoming::web::routes::{LoginRequestDto, LoginResponse};
use crate::coding_profile::adapter::incoming::web::routes::{
    CreateCodingProfileRequest, UpdateCodingProfileRequest,
};
use crate::coding_profile::application::domain::entities::ProfileStat;
use crate::coding_profile::application::ports::outgoing::CodingProfileResult;
use crate::contact::adapter::incoming::web::routes::SubmitMessageRequest;
use crate::contact::application::ports::outgoing::MessageResult;
use crate::experience::adapter::incoming::web::routes::{
    CreateExperienceRequest, UpdateExperienceRequest,
};
use crate::experience::application::domain::entities::ExperienceType;
use crate::experience::application::ports::outgoing::ExperienceResult;
use crate::project::adapter::incoming::web::routes::{CreateProjectRequest, UpdateProjectRequest};
use crate::project::application::ports::outgoing::ProjectResult;
use crate::settings::adapter::incoming::web::routes::UpsertSettingsRequest;
use crate::settings::application::ports::outgoing::SettingsResult;
use crate::skill::adapter::incoming::web::routes::{CreateSkillRequest, UpdateSkillRequest};
use crate::skill::application::ports::outgoing::SkillResult;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Public portfolio content and the admin endpoints that manage it"
    ),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::login_admin_handler,

        // Portfolio (public reads)
        crate::settings::adapter::incoming::web::routes::get_settings_handler,
        crate::project::adapter::incoming::web::routes::get_projects_handler,
        crate::skill::adapter::incoming::web::routes::get_skills_handler,
        crate::experience::adapter::incoming::web::routes::get_experiences_handler,
        crate::coding_profile::adapter::incoming::web::routes::get_coding_profiles_handler,

        // Contact
        crate::contact::adapter::incoming::web::routes::submit_message_handler,
    ),
    components(
        schemas(
            // Shared bodies
            ErrorResponse,
            RemovedResponse,

            // Auth DTOs
            LoginRequestDto,
            LoginResponse,

            // Portfolio
            SettingsResult,
            UpsertSettingsRequest,
            ProjectResult,
            CreateProjectRequest,
            UpdateProjectRequest,
            SkillResult,
            CreateSkillRequest,
            UpdateSkillRequest,
            ExperienceType,
            ExperienceResult,
            CreateExperienceRequest,
            UpdateExperienceRequest,
            ProfileStat,
            CodingProfileResult,
            CreateCodingProfileRequest,
            UpdateCodingProfileRequest,

            // Contact
            SubmitMessageRequest,
            MessageResult,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin login"),
        (name = "portfolio", description = "Portfolio content"),
        (name = "contact", description = "Contact messages"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "AdminToken",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    AUTH_TOKEN_HEADER,
                    "Token returned by /api/auth/login",
                ))),
            )
        }
    }
}
