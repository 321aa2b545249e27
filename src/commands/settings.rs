//! `/chcp` and `/help`.

use std::fmt::Write;

use slirc_proto::{CodePage, ProtocolError};
use tracing::debug;

use super::{CommandKind, Reply, required};
use crate::error::{CommandError, CommandResult};
use crate::state::ClientState;

fn lookup(name: &str) -> Result<CodePage, CommandError> {
    name.parse().map_err(|e: ProtocolError| {
        debug!(error = %e, "Code page lookup failed");
        CommandError::UnsupportedCodePage {
            name: name.to_string(),
            supported: CodePage::supported_names(),
        }
    })
}

pub(super) fn validate_chcp(args: &[String]) -> CommandResult {
    lookup(required(args, 0, CommandKind::ChangeCodePage)?).map(|_| ())
}

pub(super) fn chcp(args: &[String], state: &mut ClientState) -> Result<Reply, CommandError> {
    let code_page = lookup(required(args, 0, CommandKind::ChangeCodePage)?)?;
    state.code_page = code_page;
    Ok(Reply::status(format!("Code page set to {code_page}")))
}

pub(super) fn help_text() -> String {
    let mut text = String::from("Commands:");
    for kind in CommandKind::ALL {
        let _ = write!(text, "\n  {:<26}{}", kind.usage(), describe(kind));
    }
    text.push_str("\nText without a leading / is sent to the active channel.");
    text
}

fn describe(kind: CommandKind) -> &'static str {
    match kind {
        CommandKind::Connect => "connect to a server",
        CommandKind::Disconnect => "disconnect from the server",
        CommandKind::ChangeNick => "change nickname",
        CommandKind::Join => "join a channel and make it active",
        CommandKind::Leave => "leave the active channel",
        CommandKind::Switch => "change or show the active channel",
        CommandKind::Names => "list users in the active channel",
        CommandKind::List => "list channels on the server",
        CommandKind::PrivateMessage => "send a private message",
        CommandKind::AddFavourite => "remember this server and its channels",
        CommandKind::ShowFavourites => "show favourite servers",
        CommandKind::ChangeCodePage => "change the wire encoding",
        CommandKind::Help => "show this help",
        CommandKind::Exit => "leave the client",
        CommandKind::Unknown => "",
    }
}
