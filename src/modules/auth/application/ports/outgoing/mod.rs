pub mod credential_verifier;
pub mod token_provider;

pub use credential_verifier::AdminCredentialVerifier;
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
