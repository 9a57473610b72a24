use std::sync::Arc;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService, ADMIN_TOKEN_TTL_SECONDS};
use crate::auth::application::ports::outgoing::TokenProvider;

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_only_0123456789";
pub const TEST_ADMIN_PASSWORD: &str = "correct-horse-battery-staple";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret_key: TEST_JWT_SECRET.to_string(),
        issuer: "portfolio".to_string(),
        access_token_expiry: ADMIN_TOKEN_TTL_SECONDS,
    }
}

pub fn create_test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(test_jwt_config())
}

/// Shape the `AdminUser` extractor looks up in app data.
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(create_test_jwt_service())
}

/// A fresh admin token accepted by `test_token_provider()`.
pub fn admin_token() -> String {
    create_test_jwt_service()
        .generate_admin_token()
        .expect("test token should encode")
}
