use async_trait::async_trait;
use solid_common::error::Result;
use solid_common::ports::logging::LoggingService;
use tracing::info;

/// Writes audit messages as `INFO` events under the `solid::audit` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

#[async_trait]
impl LoggingService for TracingLogger {
    async fn log_message(&self, message: &str) -> Result<()> {
        info!(target: "solid::audit", "{message}");
        Ok(())
    }
}
