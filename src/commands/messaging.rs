//! `/pm` and free text.

use super::{CommandKind, Reply, required};
use crate::error::CommandError;

pub(super) fn private_message(args: &[String]) -> Result<Reply, CommandError> {
    let target = required(args, 0, CommandKind::PrivateMessage)?;
    let text = args[1..].join(" ");
    Ok(Reply::wire(format!("PRIVMSG {target} :{text}")))
}
