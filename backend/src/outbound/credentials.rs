//! bcrypt-backed credential verifier.
//!
//! Comparisons run on tokio's blocking pool, never on the request worker.

use async_trait::async_trait;
use tokio::task;
use tracing::warn;
use zeroize::Zeroizing;

use crate::domain::ports::CredentialVerifier;

/// Verifies plaintext passwords against bcrypt hashes.
///
/// A malformed hash, or a comparison task that fails to complete, is logged
/// and reported as a mismatch.
///
/// # Examples
/// ```
/// use books::domain::ports::CredentialVerifier;
/// use books::outbound::credentials::BcryptVerifier;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let hash = bcrypt::hash("potter", 4).unwrap();
/// assert!(BcryptVerifier.verify("potter", &hash).await);
/// assert!(!BcryptVerifier.verify("malfoy", &hash).await);
/// # });
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BcryptVerifier;

#[async_trait]
impl CredentialVerifier for BcryptVerifier {
    async fn verify(&self, plaintext: &str, stored_hash: &str) -> bool {
        let plaintext = Zeroizing::new(plaintext.to_owned());
        let stored_hash = stored_hash.to_owned();
        let outcome =
            task::spawn_blocking(move || bcrypt::verify(plaintext.as_str(), &stored_hash)).await;
        match outcome {
            Ok(Ok(matched)) => matched,
            Ok(Err(error)) => {
                warn!(%error, "stored credential hash could not be checked");
                false
            }
            Err(error) => {
                warn!(%error, "credential check task did not complete");
                false
            }
        }
    }
}
