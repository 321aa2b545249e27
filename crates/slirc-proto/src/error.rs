//! Error types for the wire layer.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Top-level protocol errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A single line exceeded the framing limit.
    #[error("line too long: {actual} bytes (limit {limit})")]
    MessageTooLong {
        /// Observed length in bytes.
        actual: usize,
        /// Configured limit in bytes.
        limit: usize,
    },

    /// A code page name outside the supported set.
    #[error("unknown code page: {0}")]
    UnknownCodePage(String),
}

/// Errors produced by the line tokenizer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MessageParseError {
    /// The line was empty after trimming the terminator.
    #[error("empty message")]
    EmptyMessage,

    /// A prefix was present but nothing followed it.
    #[error("missing command after prefix")]
    MissingCommand,

    /// The prefix was `:` with no name.
    #[error("empty prefix")]
    EmptyPrefix,
}
