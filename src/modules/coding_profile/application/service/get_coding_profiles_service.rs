use async_trait::async_trait;

use crate::modules::coding_profile::application::ports::{
    incoming::use_cases::{GetCodingProfilesError, GetCodingProfilesUseCase},
    outgoing::{CodingProfileQuery, CodingProfileResult},
};

#[derive(Debug, Clone)]
pub struct GetCodingProfilesService<Q>
where
    Q: CodingProfileQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetCodingProfilesService<Q>
where
    Q: CodingProfileQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCodingProfilesUseCase for GetCodingProfilesService<Q>
where
    Q: CodingProfileQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<CodingProfileResult>, GetCodingProfilesError> {
        self.query
            .list_coding_profiles()
            .await
            .map_err(|e| GetCodingProfilesError::QueryFailed(e.to_string()))
    }
}
