use async_trait::async_trait;

use super::experience_repository::ExperienceResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ExperienceQuery: Send + Sync {
    /// Ordered by the `period` label, descending. The comparison is plain
    /// string order, not chronological.
    async fn list_experiences(&self) -> Result<Vec<ExperienceResult>, ExperienceQueryError>;
}
