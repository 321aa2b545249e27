//! Messages consumed by the session task.

use bytes::Bytes;

/// Everything that reaches the session, in arrival order.
#[derive(Debug)]
pub enum SessionEvent {
    /// One line typed by the user.
    Input(String),
    /// One raw line read from connection `connection`, terminator included.
    Received { connection: u64, line: Bytes },
    /// Connection `connection` ended on the remote side or failed.
    Closed {
        connection: u64,
        reason: Option<String>,
    },
    /// Stop the session.
    Shutdown,
}
