//! Server keepalive.

use slirc_proto::MessageRef;

/// The `PONG` answering a `PING` line, or `None` for any other line.
pub fn pong_reply(line: &str) -> Option<String> {
    let msg = MessageRef::parse(line).ok()?;
    if !msg.command_name().eq_ignore_ascii_case("PING") {
        return None;
    }
    Some(match msg.arg(0) {
        Some(token) => format!("PONG :{token}"),
        None => "PONG".to_string(),
    })
}
