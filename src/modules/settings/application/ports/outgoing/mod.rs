pub mod settings_repository;

pub use settings_repository::{
    NewSettingsData, PatchSettingsData, SettingsRepository, SettingsRepositoryError,
    SettingsResult,
};
