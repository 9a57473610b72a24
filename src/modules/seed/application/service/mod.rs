mod seed_portfolio_service;

pub use seed_portfolio_service::SeedPortfolioService;
