use async_trait::async_trait;

use crate::modules::seed::application::domain::SeedSummary;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SeedPortfolioError {
    #[error("Failed to seed portfolio: {0}")]
    StoreFailed(String),
}

#[async_trait]
pub trait SeedPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> Result<SeedSummary, SeedPortfolioError>;
}
