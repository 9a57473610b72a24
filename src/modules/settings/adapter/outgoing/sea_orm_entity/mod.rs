pub mod portfolio_settings;
