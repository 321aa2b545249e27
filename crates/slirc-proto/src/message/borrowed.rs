//! Borrowed message view.

use crate::error::MessageParseError;
use crate::prefix::PrefixRef;

use super::parse::Tokens;

/// A tokenized line that borrows from its input.
///
/// # Example
///
/// ```
/// use slirc_proto::message::MessageRef;
///
/// let msg = MessageRef::parse(":irc.example.net 353 me = #rust :alice bob").unwrap();
/// assert_eq!(msg.command_name(), "353");
/// assert_eq!(msg.args(), &["me", "=", "#rust", "alice bob"]);
/// assert_eq!(msg.rest_after(1), Some("= #rust :alice bob"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageRef<'a> {
    /// Parsed message prefix, if present.
    pub prefix: Option<PrefixRef<'a>>,
    /// The original line, terminator removed.
    pub raw: &'a str,
    command: &'a str,
    params: &'a str,
    args: Vec<&'a str>,
    has_trailing: bool,
}

impl<'a> MessageRef<'a> {
    /// Tokenize a single line. A trailing CR-LF (or bare LF) is ignored.
    #[must_use = "parsing result should be handled"]
    pub fn parse(s: &'a str) -> Result<MessageRef<'a>, MessageParseError> {
        let trimmed = s.trim_end_matches(['\r', '\n']);
        if trimmed.trim().is_empty() {
            return Err(MessageParseError::EmptyMessage);
        }

        let tokens = Tokens::split(trimmed)?;

        Ok(MessageRef {
            prefix: tokens.prefix.map(PrefixRef::parse),
            raw: trimmed,
            command: tokens.command,
            params: tokens.params,
            args: tokens.args,
            has_trailing: tokens.has_trailing,
        })
    }

    /// The command token exactly as received.
    #[inline]
    pub fn command_name(&self) -> &'a str {
        self.command
    }

    /// All arguments; the trailing text, if any, is the last one.
    #[inline]
    pub fn args(&self) -> &[&'a str] {
        &self.args
    }

    /// Get a specific argument by index.
    #[inline]
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).copied()
    }

    /// The `:`-marked trailing text, without the marker.
    pub fn trailing(&self) -> Option<&'a str> {
        if self.has_trailing {
            self.args.last().copied()
        } else {
            None
        }
    }

    /// Everything after the first `n` middle arguments, verbatim.
    ///
    /// Returns `None` when nothing follows.
    pub fn rest_after(&self, n: usize) -> Option<&'a str> {
        let mut rest = self.params;
        for _ in 0..n {
            if rest.starts_with(':') {
                return None;
            }
            let end = rest.find(' ').unwrap_or(rest.len());
            rest = rest[end..].trim_start_matches(' ');
        }
        (!rest.is_empty()).then_some(rest)
    }

    /// Get the source nickname from the prefix, if present.
    pub fn source_nickname(&self) -> Option<&'a str> {
        self.prefix.as_ref().and_then(|p| p.nickname())
    }
}
