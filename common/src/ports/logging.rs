use async_trait::async_trait;

use crate::error::Result;

/// Records a human readable audit message.
///
/// Distinct from diagnostics: services still emit `tracing` events on their
/// own, this port is for messages that are part of the use case.
#[async_trait]
pub trait LoggingService: Send + Sync {
    async fn log_message(&self, message: &str) -> Result<()>;
}
