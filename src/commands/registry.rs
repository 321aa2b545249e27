//! Input dispatch.
//!
//! The `Registry` maps slash-verbs to command kinds and turns each input
//! line into a [`Command`].

use std::collections::HashMap;

use tracing::debug;

use super::{COMMAND_PREFIX, Command, CommandKind};
use crate::state::ClientState;

/// Verb table for slash-commands.
pub struct Registry {
    verbs: HashMap<&'static str, CommandKind>,
}

impl Registry {
    /// Create a registry with every command registered.
    pub fn new() -> Self {
        let verbs = CommandKind::ALL
            .into_iter()
            .map(|kind| (kind.verb(), kind))
            .collect();
        Self { verbs }
    }

    /// Build the command for one input line (terminator already removed).
    ///
    /// Text without the prefix goes to the active channel; with no active
    /// channel it does nothing.
    pub fn dispatch(&self, input: &str, state: &ClientState) -> Command {
        if input.starts_with(COMMAND_PREFIX) {
            let mut tokens = input.split_whitespace();
            let verb = tokens.next().unwrap_or_default();
            let args = tokens.map(str::to_string).collect();

            return match self.verbs.get(verb) {
                Some(&kind) => Command::new(kind, args),
                None => {
                    debug!(verb = %verb, "Unknown command");
                    Command::new(CommandKind::Unknown, args)
                }
            };
        }

        let text = input.trim_end();
        match &state.current_channel {
            Some(channel) if !text.trim_start().is_empty() => Command::new(
                CommandKind::PrivateMessage,
                vec![channel.clone(), text.to_string()],
            ),
            _ => Command::unknown(),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
