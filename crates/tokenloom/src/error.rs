//! Error types for host adapters and the generation pipeline.

use thiserror::Error;

/// Errors surfaced by a [`DesignHost`](crate::host::DesignHost) adapter.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    #[error("Unknown variable: {0}")]
    UnknownVariable(String),

    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Wrong value type for variable {0}")]
    TypeMismatch(String),

    #[error("Font not loaded: {0} {1}")]
    FontUnavailable(String, String),

    #[error("Host call failed: {0}")]
    Backend(String),
}

// Create a type alias for convenience
pub type HostResult<T> = std::result::Result<T, HostError>;

/// Errors from a full generation run (parse, token batch, style guide).
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Neither `:root` nor `.dark` yielded a variable. Raised before any host
    /// call is made.
    #[error(
        "No valid CSS variables found. Make sure your CSS includes :root {{ }} or .dark {{ }} blocks."
    )]
    EmptyTheme,

    #[error(transparent)]
    Host(#[from] HostError),
}
