use std::sync::Arc;

use crate::modules::settings::application::ports::incoming::use_cases::{
    GetSettingsUseCase, UpsertSettingsUseCase,
};

#[derive(Clone)]
pub struct SettingsUseCases {
    pub get: Arc<dyn GetSettingsUseCase + Send + Sync>,
    pub upsert: Arc<dyn UpsertSettingsUseCase + Send + Sync>,
}
