//! Standardized span constructors for client observability.

pub mod spans {
    use tracing::{Span, debug_span, info_span};

    /// Create a span for the session task.
    pub fn session(nick: &str) -> Span {
        info_span!("session", nick = %nick)
    }

    /// Create a span for one server connection.
    pub fn connection(id: u64, addr: &str) -> Span {
        info_span!("connection", id = id, addr = %addr)
    }

    /// Create a span for a command execution.
    pub fn command(verb: &str, channel: Option<&str>) -> Span {
        if let Some(channel) = channel {
            debug_span!("command", verb = %verb, channel = %channel)
        } else {
            debug_span!("command", verb = %verb)
        }
    }
}
