use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token was issued by an unknown issuer")]
    InvalidIssuer,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Structure for JWT Claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub role: String, // "admin"
    pub iss: String,  // Issuer
    pub exp: i64,     // Expiration timestamp
    pub iat: i64,     // Issued at timestamp
    pub nbf: i64,     // Not before timestamp
}

pub trait TokenProvider: Send + Sync {
    /// Signed token carrying the admin role, valid for one hour.
    fn generate_admin_token(&self) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
