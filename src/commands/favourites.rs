//! `/add` and `/fav`.

use super::Reply;
use crate::error::{CommandError, CommandResult};
use crate::state::ClientState;

pub(super) fn validate_add(state: &ClientState) -> CommandResult {
    match &state.hostname {
        Some(host) if state.is_connected => {
            if state.favourite_servers.contains_key(host) {
                Err(CommandError::AlreadyFavourite(host.clone()))
            } else {
                Ok(())
            }
        }
        _ => Err(CommandError::NotConnected),
    }
}

pub(super) fn add(state: &mut ClientState) -> Result<Reply, CommandError> {
    let host = state.hostname.clone().ok_or(CommandError::NotConnected)?;
    let channels = state.channel_list();
    state.favourite_servers.insert(host.clone(), channels);
    Ok(Reply::status(format!("Added {host} to favourites")))
}

pub(super) fn show(state: &ClientState) -> Result<Reply, CommandError> {
    if state.favourite_servers.is_empty() {
        return Ok(Reply::status("No favourite servers"));
    }

    let mut text = String::from("Favourite servers:");
    for (host, channels) in &state.favourite_servers {
        text.push_str("\n  ");
        text.push_str(host);
        if !channels.is_empty() {
            text.push_str(" (");
            text.push_str(channels);
            text.push(')');
        }
    }
    Ok(Reply::status(text))
}
