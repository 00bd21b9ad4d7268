//! Log sink port.

/// Side channel for one info line per operation and one error line per failure.
pub trait GatewayLogger: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Discards everything. The default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl GatewayLogger for NoopLogger {
    fn info(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}
