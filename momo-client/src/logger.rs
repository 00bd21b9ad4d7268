//! `tracing` adapter for the `GatewayLogger` port.

use momo_types::GatewayLogger;

/// Forwards gateway log lines to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl GatewayLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "momo_client", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "momo_client", "{}", message);
    }
}
