pub mod portfolio_dataset;

pub use portfolio_dataset::{PortfolioDataset, SeedSummary};
