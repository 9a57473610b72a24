use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{AdminCredentialVerifier, TokenProvider};

// ========================= Login Request =========================
#[derive(Clone)]
pub struct LoginRequest {
    password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("password", &"<redacted>")
            .finish()
    }
}

impl LoginRequest {
    /// The candidate is taken as-is; an empty string simply never matches.
    pub fn new(password: String) -> Self {
        Self { password }
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid Credentials")]
    InvalidCredentials,

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

// ============================ Login Response =================================
#[derive(Debug, Clone, Serialize)]
pub struct LoginAdminResponse {
    pub token: String,
}

// ============================ Login Admin Use Case =============================
#[async_trait]
pub trait ILoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginAdminResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginAdminUseCase {
    verifier: Arc<dyn AdminCredentialVerifier>,
    token_provider: Arc<dyn TokenProvider>,
}

impl LoginAdminUseCase {
    pub fn new(
        verifier: Arc<dyn AdminCredentialVerifier>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            verifier,
            token_provider,
        }
    }
}

#[async_trait]
impl ILoginAdminUseCase for LoginAdminUseCase {
    async fn execute(&self, request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
        if !self.verifier.verify(request.password()) {
            return Err(LoginError::InvalidCredentials);
        }

        let token = self
            .token_provider
            .generate_admin_token()
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginAdminResponse { token })
    }
}
