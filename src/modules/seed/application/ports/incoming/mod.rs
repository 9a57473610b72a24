mod seed_portfolio;

pub use seed_portfolio::{SeedPortfolioError, SeedPortfolioUseCase};
