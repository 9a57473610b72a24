mod get_settings;
mod upsert_settings;

pub use get_settings::{__path_get_settings_handler, get_settings_handler};
pub use upsert_settings::{upsert_settings_handler, UpsertSettingsRequest};
