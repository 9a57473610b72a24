mod portfolio_flow;
pub mod support;
