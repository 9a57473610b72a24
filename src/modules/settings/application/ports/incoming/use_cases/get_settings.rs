use async_trait::async_trait;

use crate::modules::settings::application::ports::outgoing::SettingsResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSettingsError {
    #[error("Failed to fetch settings: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSettingsUseCase: Send + Sync {
    /// `None` until the record has been created.
    async fn execute(&self) -> Result<Option<SettingsResult>, GetSettingsError>;
}
