use thiserror::Error;

/// Errors raised while answering an invocation
#[derive(Debug, Error)]
pub enum Error {
    /// The response payload could not be rendered as JSON
    #[error("failed to serialize response payload: {0}")]
    Serialization(#[from] serde_json::Error),
}
