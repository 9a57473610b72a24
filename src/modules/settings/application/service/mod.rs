mod get_settings_service;
mod upsert_settings_service;

pub use get_settings_service::GetSettingsService;
pub use upsert_settings_service::UpsertSettingsService;
