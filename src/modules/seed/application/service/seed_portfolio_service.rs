use async_trait::async_trait;
use tracing::info;

use crate::modules::seed::application::domain::{PortfolioDataset, SeedSummary};
use crate::modules::seed::application::ports::{
    incoming::{SeedPortfolioError, SeedPortfolioUseCase},
    outgoing::PortfolioSeedStore,
};

/// Replaces the portfolio content with the starter dataset.
#[derive(Debug, Clone)]
pub struct SeedPortfolioService<S>
where
    S: PortfolioSeedStore + Send + Sync,
{
    store: S,
}

impl<S> SeedPortfolioService<S>
where
    S: PortfolioSeedStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> SeedPortfolioUseCase for SeedPortfolioService<S>
where
    S: PortfolioSeedStore + Send + Sync,
{
    async fn execute(&self) -> Result<SeedSummary, SeedPortfolioError> {
        let dataset = PortfolioDataset::starter();
        let expected = dataset.summary();

        let summary = self
            .store
            .replace_portfolio(dataset)
            .await
            .map_err(|e| SeedPortfolioError::StoreFailed(e.to_string()))?;

        if summary != expected {
            tracing::warn!(%expected, inserted = %summary, "Seed row counts differ from dataset");
        }

        info!(%summary, "Portfolio seeded");
        Ok(summary)
    }
}
