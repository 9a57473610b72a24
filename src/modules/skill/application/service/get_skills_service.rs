use async_trait::async_trait;

use crate::modules::skill::application::ports::{
    incoming::use_cases::{GetSkillsError, GetSkillsUseCase},
    outgoing::{SkillQuery, SkillResult},
};

#[derive(Debug, Clone)]
pub struct GetSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSkillsUseCase for GetSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<SkillResult>, GetSkillsError> {
        self.query
            .list_skills()
            .await
            .map_err(|e| GetSkillsError::QueryFailed(e.to_string()))
    }
}
