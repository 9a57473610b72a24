use std::fmt;

use crate::shared::config::{required, ConfigError};

/// Admin tokens live for exactly one hour.
pub const ADMIN_TOKEN_TTL_SECONDS: i64 = 3600;

const MIN_SECRET_LEN: usize = 32;
const DEFAULT_ISSUER: &str = "portfolio";

#[derive(Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret_key", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("access_token_expiry", &self.access_token_expiry)
            .finish()
    }
}

impl JwtConfig {
    /// Build the JWT configuration from `JWT_SECRET` and `JWT_ISSUER`.
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = required(lookup, "JWT_SECRET")?;

        // HS256 requires at least 32 bytes of key material
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: format!("must be at least {} characters long", MIN_SECRET_LEN),
            });
        }

        let issuer = lookup("JWT_ISSUER")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ISSUER.to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry: ADMIN_TOKEN_TTL_SECONDS,
        })
    }
}
