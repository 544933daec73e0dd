use async_trait::async_trait;

use crate::error::Result;

/// Sends a single email.
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Delivers `body` to `recipient` under `subject`.
    ///
    /// # Errors
    /// Whatever the transport reports. Nothing has been sent when this fails.
    async fn send_email(&self, recipient: &str, subject: &str, body: &str) -> Result<()>;
}
