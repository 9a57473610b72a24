//! Replaces the portfolio content with the starter dataset.
//!
//! Contact messages are left alone. Run with `cargo run --bin seed`.

use anyhow::Context;
use sea_orm::Database;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_backend::seed::adapter::outgoing::SeedStorePostgres;
use portfolio_backend::seed::application::ports::incoming::SeedPortfolioUseCase;
use portfolio_backend::seed::application::service::SeedPortfolioService;
use portfolio_backend::shared::config::{load_env_files, required};

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    load_env_files();

    let database_url = required(&|key: &str| std::env::var(key).ok(), "DATABASE_URL")?;

    let conn = Database::connect(database_url)
        .await
        .context("Failed to connect to database")?;

    let service = SeedPortfolioService::new(SeedStorePostgres::new(Arc::new(conn)));
    let summary = service.execute().await.context("Seeding failed")?;

    info!(%summary, "Seed complete");
    Ok(())
}
