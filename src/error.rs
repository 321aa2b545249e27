//! Unified error handling for slirc-client.
//!
//! Command failures never leave the session: their `Display` text is the
//! status line shown to the user. Transport failures are converted into
//! command failures at the command boundary.

use std::io;

use thiserror::Error;

// ============================================================================
// Command Errors (validation and preconditions)
// ============================================================================

/// Reasons a command is rejected before or during execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Not connected to a server")]
    NotConnected,

    #[error("Already connected to {0}")]
    AlreadyConnected(String),

    #[error("Invalid port: {0}")]
    InvalidPort(String),

    #[error("Invalid nickname: {0}")]
    InvalidNickname(String),

    #[error("Already joined {0}")]
    AlreadyJoined(String),

    #[error("No active channel")]
    NoActiveChannel,

    #[error("Not joined to {0}")]
    NotJoined(String),

    #[error("{0} is already the active channel")]
    AlreadyCurrent(String),

    #[error("{0} is already a favourite")]
    AlreadyFavourite(String),

    #[error("Unsupported code page: {name}. Supported: {supported}")]
    UnsupportedCodePage { name: String, supported: String },

    #[error("Could not connect to {host}: {reason}")]
    ConnectFailed { host: String, reason: String },
}

impl CommandError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Usage(_) => "usage",
            Self::NotConnected => "not_connected",
            Self::AlreadyConnected(_) => "already_connected",
            Self::InvalidPort(_) => "invalid_port",
            Self::InvalidNickname(_) => "invalid_nickname",
            Self::AlreadyJoined(_) => "already_joined",
            Self::NoActiveChannel => "no_active_channel",
            Self::NotJoined(_) => "not_joined",
            Self::AlreadyCurrent(_) => "already_current",
            Self::AlreadyFavourite(_) => "already_favourite",
            Self::UnsupportedCodePage { .. } => "unsupported_code_page",
            Self::ConnectFailed { .. } => "connect_failed",
        }
    }
}

/// Result type for command validation.
pub type CommandResult = Result<(), CommandError>;

// ============================================================================
// Transport Errors
// ============================================================================

/// Errors raised by a transport.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("could not resolve {host}: {source}")]
    Resolve {
        host: String,
        #[source]
        source: io::Error,
    },

    #[error("could not connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("timed out")]
    Timeout,

    #[error("not connected")]
    NotConnected,

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl TransportError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Resolve { .. } => "resolve",
            Self::Connect { .. } => "connect",
            Self::Timeout => "timeout",
            Self::NotConnected => "not_connected",
            Self::Io(_) => "io",
        }
    }

    /// Short phrase for status lines. The full error goes to the log.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Resolve { .. } => "name not resolved",
            Self::Connect { source, .. } => match source.kind() {
                io::ErrorKind::ConnectionRefused => "connection refused",
                io::ErrorKind::TimedOut => "timed out",
                io::ErrorKind::HostUnreachable | io::ErrorKind::NetworkUnreachable => {
                    "host unreachable"
                }
                _ => "connection failed",
            },
            Self::Timeout => "timed out",
            Self::NotConnected => "client is shutting down",
            Self::Io(_) => "connection failed",
        }
    }
}
