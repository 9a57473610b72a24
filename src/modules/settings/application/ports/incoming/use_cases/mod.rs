mod get_settings;
mod upsert_settings;

pub use get_settings::{GetSettingsError, GetSettingsUseCase};
pub use upsert_settings::{
    UpsertSettingsCommand, UpsertSettingsCommandError, UpsertSettingsError,
    UpsertSettingsUseCase,
};
