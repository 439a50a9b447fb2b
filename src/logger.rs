/// Sink for the summary line a check emits when it finds issues.
///
/// A logger is an optional collaborator: instances hold `Option<&dyn
/// Logger>` and emit nothing when it is absent. Implementations must be safe
/// for concurrent use — the check contract itself is side-effect-free, so a
/// driver running checks in parallel is sound exactly when its logger is.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
}

/// Logger that forwards check summaries to the `tracing` subscriber.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }
}
