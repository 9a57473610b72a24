mod portfolio_seed_store;

pub use portfolio_seed_store::{PortfolioSeedStore, SeedStoreError};
