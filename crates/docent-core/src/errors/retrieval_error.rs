/// Retrieval subsystem errors.
///
/// Individual expanded-query failures are isolated inside the aggregator
/// and only logged; this error is raised when no query could be served.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("all {attempted} expanded queries failed, last error: {reason}")]
    AllQueriesFailed { attempted: usize, reason: String },
}
