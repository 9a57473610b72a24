pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::coding_profile;
pub use modules::contact;
pub use modules::experience;
pub use modules::project;
pub use modules::seed;
pub use modules::settings;
pub use modules::skill;

use actix_web::web;
use std::sync::Arc;

use crate::auth::application::use_cases::login_admin::ILoginAdminUseCase;
use crate::coding_profile::application::coding_profile_use_cases::CodingProfileUseCases;
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::experience::application::experience_use_cases::ExperienceUseCases;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::settings::application::settings_use_cases::SettingsUseCases;
use crate::skill::application::skill_use_cases::SkillUseCases;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub login_admin_use_case: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    pub settings: SettingsUseCases,
    pub project: ProjectUseCases,
    pub skill: SkillUseCases,
    pub experience: ExperienceUseCases,
    pub coding_profile: CodingProfileUseCases,
    pub contact: ContactUseCases,
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_admin_handler);
    // Settings
    cfg.service(crate::settings::adapter::incoming::web::routes::get_settings_handler);
    cfg.service(crate::settings::adapter::incoming::web::routes::upsert_settings_handler);
    // Projects
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::delete_project_handler);
    // Skills
    cfg.service(crate::skill::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::create_skill_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::update_skill_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::delete_skill_handler);
    // Experience
    cfg.service(crate::experience::adapter::incoming::web::routes::get_experiences_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::create_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::update_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::delete_experience_handler);
    // Coding profiles
    cfg.service(crate::coding_profile::adapter::incoming::web::routes::get_coding_profiles_handler);
    cfg.service(
        crate::coding_profile::adapter::incoming::web::routes::create_coding_profile_handler,
    );
    cfg.service(
        crate::coding_profile::adapter::incoming::web::routes::update_coding_profile_handler,
    );
    cfg.service(
        crate::coding_profile::adapter::incoming::web::routes::delete_coding_profile_handler,
    );
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::get_messages_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_message_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::delete_message_handler);
}
