//! Error types for pickline
//!
//! Configuration problems are detected before any terminal mode change;
//! everything else is a terminal I/O failure or a lifecycle outcome
//! (interrupt, closed input stream).

use thiserror::Error;

/// Top-level error type for a prompt invocation
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("choice list is empty")]
    EmptyChoices,

    #[error("default index {index} out of range for {len} choices")]
    DefaultIndexOutOfRange { index: usize, len: usize },

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt interrupted")]
    Interrupted,

    #[error("input stream closed before a selection was made")]
    InputClosed,
}

/// Result type alias for PromptError
pub type Result<T> = std::result::Result<T, PromptError>;
