use async_trait::async_trait;

use crate::modules::settings::application::ports::{
    incoming::use_cases::{GetSettingsError, GetSettingsUseCase},
    outgoing::{SettingsRepository, SettingsResult},
};

#[derive(Debug, Clone)]
pub struct GetSettingsService<R>
where
    R: SettingsRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetSettingsService<R>
where
    R: SettingsRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetSettingsUseCase for GetSettingsService<R>
where
    R: SettingsRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Option<SettingsResult>, GetSettingsError> {
        self.repository
            .find_settings()
            .await
            .map_err(|e| GetSettingsError::QueryFailed(e.to_string()))
    }
}
