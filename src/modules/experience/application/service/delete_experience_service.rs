use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::ports::{
    incoming::use_cases::{DeleteExperienceError, DeleteExperienceUseCase},
    outgoing::{ExperienceRepository, ExperienceRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteExperienceUseCase for DeleteExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self, experience_id: Uuid) -> Result<(), DeleteExperienceError> {
        self.repository
            .delete_experience(experience_id)
            .await
            .map_err(|e| match e {
                ExperienceRepositoryError::NotFound => DeleteExperienceError::NotFound,
                other => DeleteExperienceError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::experience::application::ports::outgoing::{
        CreateExperienceData, ExperienceResult, PatchExperienceData,
    };

    struct MockExperienceRepository {
        result: Result<(), ExperienceRepositoryError>,
    }

    #[async_trait]
    impl ExperienceRepository for MockExperienceRepository {
        async fn create_experience(
            &self,
            _data: CreateExperienceData,
        ) -> Result<ExperienceResult, ExperienceRepositoryError> {
            unimplemented!()
        }

        async fn patch_experience(
            &self,
            _experience_id: Uuid,
            _data: PatchExperienceData,
        ) -> Result<ExperienceResult, ExperienceRepositoryError> {
            unimplemented!()
        }

        async fn delete_experience(
            &self,
            _experience_id: Uuid,
        ) -> Result<(), ExperienceRepositoryError> {
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn delete_unknown_entry_is_not_found() {
        let service = DeleteExperienceService::new(MockExperienceRepository {
            result: Err(ExperienceRepositoryError::NotFound),
        });

        assert!(matches!(
            service.execute(Uuid::new_v4()).await,
            Err(DeleteExperienceError::NotFound)
        ));
    }

    #[tokio::test]
    async fn database_failure_is_repository_error() {
        let service = DeleteExperienceService::new(MockExperienceRepository {
            result: Err(ExperienceRepositoryError::DatabaseError("gone".to_string())),
        });

        assert!(matches!(
            service.execute(Uuid::new_v4()).await,
            Err(DeleteExperienceError::RepositoryError(_))
        ));
    }
}
