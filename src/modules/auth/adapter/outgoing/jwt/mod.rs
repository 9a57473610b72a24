mod jwt_config;
mod jwt_service;

pub use jwt_config::{JwtConfig, ADMIN_TOKEN_TTL_SECONDS};
pub use jwt_service::JwtTokenService;
