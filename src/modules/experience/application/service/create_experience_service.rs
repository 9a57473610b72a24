use async_trait::async_trait;

use crate::modules::experience::application::ports::{
    incoming::use_cases::{
        CreateExperienceCommand, CreateExperienceError, CreateExperienceUseCase,
    },
    outgoing::{CreateExperienceData, ExperienceRepository, ExperienceResult},
};

#[derive(Debug, Clone)]
pub struct CreateExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateExperienceUseCase for CreateExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateExperienceCommand,
    ) -> Result<ExperienceResult, CreateExperienceError> {
        let data = CreateExperienceData {
            title: command.title().to_string(),
            company: command.company().cloned(),
            location: command.location().cloned(),
            period: command.period().to_string(),
            description: command.description().cloned(),
            experience_type: command.experience_type(),
        };

        self.repository
            .create_experience(data)
            .await
            .map_err(|e| CreateExperienceError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::experience::application::domain::entities::ExperienceType;
    use crate::modules::experience::application::ports::outgoing::{
        ExperienceRepositoryError, PatchExperienceData,
    };
    use uuid::Uuid;

    // ──────────────────────────────────────────────────────────
    // Mock Repository
    // ──────────────────────────────────────────────────────────

    /// Echoes the insert back with a fresh id, like the store would.
    struct EchoRepository {
        fail: bool,
    }

    #[async_trait]
    impl ExperienceRepository for EchoRepository {
        async fn create_experience(
            &self,
            data: CreateExperienceData,
        ) -> Result<ExperienceResult, ExperienceRepositoryError> {
            if self.fail {
                return Err(ExperienceRepositoryError::DatabaseError(
                    "disk full".to_string(),
                ));
            }

            Ok(ExperienceResult {
                id: Uuid::new_v4(),
                title: data.title,
                company: data.company,
                location: data.location,
                period: data.period,
                description: data.description,
                experience_type: data.experience_type,
            })
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
            unimplemented!()
        }
    }

    fn command() -> CreateExperienceCommand {
        CreateExperienceCommand::new(
            "HackMIT Finalist".to_string(),
            None,
            Some("Cambridge, MA".to_string()),
            "Sep 2023".to_string(),
            None,
            Some(ExperienceType::Hackathon),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn create_experience_keeps_type_and_optional_fields() {
        let service = CreateExperienceService::new(EchoRepository { fail: false });

        let created = service.execute(command()).await.unwrap();

        assert_eq!(created.experience_type, ExperienceType::Hackathon);
        assert_eq!(created.location.as_deref(), Some("Cambridge, MA"));
        assert!(created.company.is_none());
    }

    #[tokio::test]
    async fn create_experience_repository_error_is_mapped() {
        let service = CreateExperienceService::new(EchoRepository { fail: true });

        assert!(matches!(
            service.execute(command()).await,
            Err(CreateExperienceError::RepositoryError(msg)) if msg.contains("disk full")
        ));
    }
}
