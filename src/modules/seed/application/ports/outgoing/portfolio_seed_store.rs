use async_trait::async_trait;

use crate::modules::seed::application::domain::{PortfolioDataset, SeedSummary};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SeedStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait PortfolioSeedStore: Send + Sync {
    /// Wipes the portfolio tables and writes `dataset` in their place as a
    /// single unit. The contact inbox is left alone.
    async fn replace_portfolio(
        &self,
        dataset: PortfolioDataset,
    ) -> Result<SeedSummary, SeedStoreError>;
}
