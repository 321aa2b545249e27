//! Splitting received text into events.

use tracing::debug;

use super::{EventKind, ServerEvent};

/// Split `buffer` into lines and build one event per recognised line.
///
/// Only prefixed lines (`:sender VERB ...`) are responses. Lines with fewer
/// than two tokens, unprefixed lines and unknown verbs are dropped.
pub fn classify(buffer: &str) -> Vec<ServerEvent> {
    let mut events = Vec::new();

    for line in buffer.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let (Some(source), Some(verb)) = (tokens.next(), tokens.next()) else {
            debug!(line = %line, "Dropping short line");
            continue;
        };
        if !source.starts_with(':') {
            debug!(line = %line, "Dropping unprefixed line");
            continue;
        }

        match EventKind::from_verb(verb) {
            Some(kind) => events.push(ServerEvent::parse(kind, line)),
            None => debug!(verb = %verb, "Dropping unhandled verb"),
        }
    }

    events
}
