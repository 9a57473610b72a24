use async_trait::async_trait;
use tracing::{debug, warn};

use crate::modules::settings::application::ports::{
    incoming::use_cases::{UpsertSettingsCommand, UpsertSettingsError, UpsertSettingsUseCase},
    outgoing::{SettingsRepository, SettingsRepositoryError, SettingsResult},
};

/// Find-or-create: merges into the existing record, or creates it from the
/// command when there is none.
#[derive(Debug, Clone)]
pub struct UpsertSettingsService<R>
where
    R: SettingsRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpsertSettingsService<R>
where
    R: SettingsRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    async fn create(
        &self,
        command: UpsertSettingsCommand,
    ) -> Result<SettingsResult, UpsertSettingsError> {
        let data = command.into_new().map_err(UpsertSettingsError::Incomplete)?;

        debug!("No settings record yet, creating one");
        self.repository
            .insert_settings(data)
            .await
            .map_err(|e| UpsertSettingsError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> UpsertSettingsUseCase for UpsertSettingsService<R>
where
    R: SettingsRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpsertSettingsCommand,
    ) -> Result<SettingsResult, UpsertSettingsError> {
        let existing = self
            .repository
            .find_settings()
            .await
            .map_err(|e| UpsertSettingsError::RepositoryError(e.to_string()))?;

        let Some(existing) = existing else {
            return self.create(command).await;
        };

        match self
            .repository
            .patch_settings(existing.id, command.clone().into_patch())
            .await
        {
            Ok(updated) => Ok(updated),
            // Removed between the read and the write (reseed)
            Err(SettingsRepositoryError::NotFound) => {
                warn!(settings_id = %existing.id, "Settings record vanished during update");
                self.create(command).await
            }
            Err(e) => Err(UpsertSettingsError::RepositoryError(e.to_string())),
        }
    }
}
