/// Checks a login candidate against the single configured admin secret.
pub trait AdminCredentialVerifier: Send + Sync {
    fn verify(&self, candidate: &str) -> bool;
}
