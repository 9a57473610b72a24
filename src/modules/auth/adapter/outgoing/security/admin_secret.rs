use sha2::{Digest, Sha256};
use std::fmt;

use crate::auth::application::ports::outgoing::credential_verifier::AdminCredentialVerifier;

/// The admin secret from configuration, kept only as its SHA-256 digest.
///
/// Candidates are hashed and the fixed-size digests compared with a
/// constant-time fold, so the time taken does not depend on how many
/// leading bytes match.
#[derive(Clone)]
pub struct ConfiguredAdminSecret {
    digest: [u8; 32],
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for ConfiguredAdminSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfiguredAdminSecret")
            .field("digest", &"<redacted>")
            .finish()
    }
}

impl ConfiguredAdminSecret {
    pub fn new(secret: &str) -> Self {
        Self {
            digest: Sha256::digest(secret.as_bytes()).into(),
        }
    }
}

impl AdminCredentialVerifier for ConfiguredAdminSecret {
    fn verify(&self, candidate: &str) -> bool {
        let candidate: [u8; 32] = Sha256::digest(candidate.as_bytes()).into();

        self.digest
            .iter()
            .zip(candidate.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}
