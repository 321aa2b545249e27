//! `/nick`.

use slirc_proto::NickExt;

use super::{CommandKind, Reply, required};
use crate::error::{CommandError, CommandResult};
use crate::state::ClientState;

pub(super) fn validate(args: &[String]) -> CommandResult {
    let name = required(args, 0, CommandKind::ChangeNick)?;
    if !name.is_valid_nick() {
        return Err(CommandError::InvalidNickname(name.to_string()));
    }
    Ok(())
}

/// Adopt the new name locally; the server may still refuse it.
pub(super) fn change(args: &[String], state: &mut ClientState) -> Result<Reply, CommandError> {
    let name = required(args, 0, CommandKind::ChangeNick)?;
    state.set_nickname(name);
    Ok(Reply::wire(format!("NICK {name}")).with_status(format!("Nickname set to {name}")))
}
