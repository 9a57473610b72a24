use async_trait::async_trait;

use super::coding_profile_repository::CodingProfileResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CodingProfileQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait CodingProfileQuery: Send + Sync {
    /// Ordered by platform name, ascending.
    async fn list_coding_profiles(&self)
        -> Result<Vec<CodingProfileResult>, CodingProfileQueryError>;
}
