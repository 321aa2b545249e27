//! Token splitting for a single line.

use crate::error::MessageParseError;

/// Raw tokens of one line.
pub(super) struct Tokens<'a> {
    pub prefix: Option<&'a str>,
    pub command: &'a str,
    /// Text after the command, leading spaces removed.
    pub params: &'a str,
    pub args: Vec<&'a str>,
    pub has_trailing: bool,
}

impl<'a> Tokens<'a> {
    /// Split `line` (terminator already removed).
    pub fn split(line: &'a str) -> Result<Self, MessageParseError> {
        let mut rest = line.trim_start_matches(' ');

        let prefix = match rest.strip_prefix(':') {
            Some(after) => {
                let end = after.find(' ').ok_or(MessageParseError::MissingCommand)?;
                if end == 0 {
                    return Err(MessageParseError::EmptyPrefix);
                }
                rest = after[end..].trim_start_matches(' ');
                Some(&after[..end])
            }
            None => None,
        };

        let end = rest.find(' ').unwrap_or(rest.len());
        let command = &rest[..end];
        if command.is_empty() {
            return Err(MessageParseError::MissingCommand);
        }
        let params = rest[end..].trim_start_matches(' ');

        let mut args = Vec::new();
        let mut has_trailing = false;
        let mut cursor = params;
        while !cursor.is_empty() {
            if let Some(text) = cursor.strip_prefix(':') {
                args.push(text);
                has_trailing = true;
                break;
            }
            let end = cursor.find(' ').unwrap_or(cursor.len());
            args.push(&cursor[..end]);
            cursor = cursor[end..].trim_start_matches(' ');
        }

        Ok(Self {
            prefix,
            command,
            params,
            args,
            has_trailing,
        })
    }
}
