//! `/server`, `/quit` and `/exit`.

use tracing::{info, warn};

use super::{CommandKind, Context, Reply, required};
use crate::error::{CommandError, CommandResult};
use crate::network::DEFAULT_PORT;
use crate::state::ClientState;

fn parse_port(arg: Option<&String>) -> Result<u16, CommandError> {
    match arg {
        None => Ok(DEFAULT_PORT),
        Some(raw) => match raw.parse::<u16>() {
            Ok(port) if port > 0 => Ok(port),
            _ => Err(CommandError::InvalidPort(raw.clone())),
        },
    }
}

pub(super) fn validate_connect(args: &[String], state: &ClientState) -> CommandResult {
    if state.is_connected {
        let host = state.hostname.clone().unwrap_or_default();
        return Err(CommandError::AlreadyConnected(host));
    }
    parse_port(args.get(1)).map(|_| ())
}

pub(super) fn validate_disconnect(state: &ClientState) -> CommandResult {
    if !state.is_connected {
        return Err(CommandError::NotConnected);
    }
    Ok(())
}

/// Open the transport and register. State changes only on success.
pub(super) async fn connect(args: &[String], ctx: &mut Context<'_>) -> Result<Reply, CommandError> {
    let host = required(args, 0, CommandKind::Connect)?;
    let port = parse_port(args.get(1))?;

    if let Err(e) = ctx.transport.connect(host, port, ctx.connect_timeout).await {
        warn!(host = %host, port, code = e.error_code(), error = %e, "Connect failed");
        return Err(CommandError::ConnectFailed {
            host: host.to_string(),
            reason: e.reason().to_string(),
        });
    }

    ctx.state.mark_connected(host);
    let nick = &ctx.state.nickname;
    let restored = ctx.state.joined_channels.len();
    info!(host = %host, port, nick = %nick, restored, "Registering");

    Ok(Reply::wire(format!("NICK {nick}\r\nUSER {nick} 0 * :{nick}"))
        .with_status(format!("Connected to {}:{port}", host.to_lowercase())))
}

pub(super) async fn disconnect(ctx: &mut Context<'_>) -> Result<Reply, CommandError> {
    let host = ctx.state.reset_connection().unwrap_or_default();
    ctx.transport.half_close().await;
    Ok(Reply::status(format!("Disconnected from {host}")))
}

pub(super) async fn exit(ctx: &mut Context<'_>) -> Result<Reply, CommandError> {
    if ctx.state.is_connected {
        ctx.transport.half_close().await;
    }
    ctx.state.stop();
    Ok(Reply::status("Bye"))
}
