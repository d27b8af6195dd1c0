use async_trait::async_trait;

use crate::domain::error::AppResult;

/// Salted one-way password digests.
///
/// `hash` never returns the same digest twice for one plaintext, and
/// `verify` fails with `Unauthorized` when the plaintext does not match.
#[async_trait]
pub trait PasswordService: 'static + Sync + Send {
    async fn hash(&self, password: &str) -> AppResult<String>;
    async fn verify(&self, password: &str, hash: &str) -> AppResult<()>;
}
