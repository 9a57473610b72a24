use async_trait::async_trait;

use crate::modules::experience::application::ports::{
    incoming::use_cases::{GetExperiencesError, GetExperiencesUseCase},
    outgoing::{ExperienceQuery, ExperienceResult},
};

#[derive(Debug, Clone)]
pub struct GetExperiencesService<Q>
where
    Q: ExperienceQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetExperiencesService<Q>
where
    Q: ExperienceQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetExperiencesUseCase for GetExperiencesService<Q>
where
    Q: ExperienceQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ExperienceResult>, GetExperiencesError> {
        self.query
            .list_experiences()
            .await
            .map_err(|e| GetExperiencesError::QueryFailed(e.to_string()))
    }
}
