//! Driven port for one-way credential comparison.
//!
//! The domain never compares secrets itself; it asks a verifier whether a
//! plaintext matches a stored hash. Adapters must treat internal failures as
//! a mismatch and keep slow hashing off the async workers.
use async_trait::async_trait;

/// Opaque plaintext-versus-hash comparison.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Return true only when `plaintext` hashes to `stored_hash`.
    async fn verify(&self, plaintext: &str, stored_hash: &str) -> bool;
}
