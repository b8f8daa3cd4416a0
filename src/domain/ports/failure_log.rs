/// Sink for the append-only failure log.
///
/// Recording is best-effort and infallible from the caller's point of view:
/// an adapter that cannot write degrades to a tracing warning rather than
/// failing the cycle that was already handling an error.
pub trait FailureLog: Send + Sync {
    /// Append one failure message.
    fn record(&self, message: &str);
}

/// Discards everything. For `--once`-style tests and wiring paths that have
/// no file to write.
pub struct NullFailureLog;

impl FailureLog for NullFailureLog {
    fn record(&self, _message: &str) {}
}
