//! `/join`, `/leave`, `/switch`, `/names` and `/list`.
//!
//! Membership is applied as soon as the request is sent. A refusal from the
//! server arrives later as a channel-error numeric and undoes it.

use super::{CommandKind, Reply, required};
use crate::error::{CommandError, CommandResult};
use crate::state::ClientState;

fn require_connection(state: &ClientState) -> CommandResult {
    if !state.is_connected {
        return Err(CommandError::NotConnected);
    }
    Ok(())
}

pub(super) fn validate_join(args: &[String], state: &ClientState) -> CommandResult {
    require_connection(state)?;
    let channel = required(args, 0, CommandKind::Join)?;
    if state.is_joined(channel) {
        return Err(CommandError::AlreadyJoined(channel.to_lowercase()));
    }
    Ok(())
}

pub(super) fn join(args: &[String], state: &mut ClientState) -> Result<Reply, CommandError> {
    let channel = state.join_channel(required(args, 0, CommandKind::Join)?);
    let password = args.get(1).map(String::as_str).unwrap_or_default();
    // The separator stays even without a password.
    Ok(Reply::wire(format!("JOIN {channel} {password}")))
}

pub(super) fn validate_leave(state: &ClientState) -> CommandResult {
    require_connection(state)?;
    match &state.current_channel {
        Some(channel) if state.joined_channels.contains(channel) => Ok(()),
        _ => Err(CommandError::NoActiveChannel),
    }
}

pub(super) fn leave(state: &mut ClientState) -> Result<Reply, CommandError> {
    let channel = state.leave_current().ok_or(CommandError::NoActiveChannel)?;
    Ok(Reply::wire(format!("PART {channel}")))
}

pub(super) fn validate_switch(args: &[String], state: &ClientState) -> CommandResult {
    let Some(target) = args.first() else {
        return Ok(());
    };
    require_connection(state)?;

    let target = target.to_lowercase();
    if !state.joined_channels.contains(&target) {
        return Err(CommandError::NotJoined(target));
    }
    if state.current_channel.as_ref() == Some(&target) {
        return Err(CommandError::AlreadyCurrent(target));
    }
    Ok(())
}

/// Local only. Without an argument, report membership.
pub(super) fn switch(args: &[String], state: &mut ClientState) -> Result<Reply, CommandError> {
    match args.first() {
        Some(target) => {
            state.switch_to(target);
            Ok(Reply::status(format!("Active channel: {}", target.to_lowercase())))
        }
        None => {
            let current = state.current_channel.as_deref().unwrap_or("none");
            let joined = if state.joined_channels.is_empty() {
                "none".to_string()
            } else {
                state.channel_list()
            };
            Ok(Reply::status(format!(
                "Active channel: {current}\nJoined channels: {joined}"
            )))
        }
    }
}

pub(super) fn validate_names(state: &ClientState) -> CommandResult {
    if state.current_channel.is_none() {
        return Err(CommandError::NoActiveChannel);
    }
    Ok(())
}

pub(super) fn names(state: &ClientState) -> Result<Reply, CommandError> {
    let channel = state
        .current_channel
        .as_deref()
        .ok_or(CommandError::NoActiveChannel)?;
    Ok(Reply::wire(format!("NAMES {channel}")))
}

#[cfg(test)]
mod tests {
    use super::super::CommandKind;
    use super::super::tests::{connected_state, run_line};
    use crate::network::mock::MockTransport;
    use crate::state::ClientState;
    use slirc_proto::CodePage;

    #[tokio::test]
    async fn test_join_keeps_separator() {
        let mut state = connected_state();
        let mut transport = MockTransport::connected();
        let (wire, _) =
            run_line(CommandKind::Join, &["#casual"], &mut state, &mut transport).await;

        assert_eq!(wire, "JOIN #casual \r\n");
        assert!(state.joined_channels.contains("#casual"));
        assert_eq!(state.current_channel.as_deref(), Some("#casual"));
    }

    #[tokio::test]
    async fn test_join_with_password_lowercases() {
        let mut state = connected_state();
        let mut transport = MockTransport::connected();
        let (wire, _) = run_line(
            CommandKind::Join,
            &["#Secret", "hunter2"],
            &mut state,
            &mut transport,
        )
        .await;
        assert_eq!(wire, "JOIN #secret hunter2\r\n");
    }

    #[tokio::test]
    async fn test_join_twice_rejected() {
        let mut state = connected_state();
        let mut transport = MockTransport::connected();
        run_line(CommandKind::Join, &["#casual"], &mut state, &mut transport).await;
        let before = state.clone();

        let (wire, status) =
            run_line(CommandKind::Join, &["#Casual"], &mut state, &mut transport).await;
        assert!(wire.is_empty());
        assert_eq!(status, "Already joined #casual");
        assert_eq!(state.joined_channels, before.joined_channels);
        assert_eq!(state.current_channel, before.current_channel);
    }

    #[tokio::test]
    async fn test_join_offline_rejected() {
        let mut state = ClientState::new("alice", CodePage::Utf8);
        let mut transport = MockTransport::default();
        let (_, status) = run_line(CommandKind::Join, &["#a"], &mut state, &mut transport).await;
        assert_eq!(status, "Not connected to a server");
        assert!(state.joined_channels.is_empty());
    }

    #[tokio::test]
    async fn test_leave() {
        let mut state = connected_state();
        let mut transport = MockTransport::connected();
        let (_, status) = run_line(CommandKind::Leave, &[], &mut state, &mut transport).await;
        assert_eq!(status, "No active channel");

        run_line(CommandKind::Join, &["#a"], &mut state, &mut transport).await;
        let (wire, _) = run_line(CommandKind::Leave, &[], &mut state, &mut transport).await;
        assert_eq!(wire, "PART #a\r\n");
        assert!(state.joined_channels.is_empty());
        assert!(state.current_channel.is_none());
    }

    #[tokio::test]
    async fn test_switch() {
        let mut state = connected_state();
        let mut transport = MockTransport::connected();
        run_line(CommandKind::Join, &["#a"], &mut state, &mut transport).await;
        run_line(CommandKind::Join, &["#b"], &mut state, &mut transport).await;

        let (wire, status) = run_line(CommandKind::Switch, &[], &mut state, &mut transport).await;
        assert!(wire.is_empty());
        assert_eq!(status, "Active channel: #b\nJoined channels: #a,#b");

        let (_, status) = run_line(CommandKind::Switch, &["#b"], &mut state, &mut transport).await;
        assert_eq!(status, "#b is already the active channel");

        let (_, status) = run_line(CommandKind::Switch, &["#c"], &mut state, &mut transport).await;
        assert_eq!(status, "Not joined to #c");

        let (wire, status) =
            run_line(CommandKind::Switch, &["#A"], &mut state, &mut transport).await;
        assert!(wire.is_empty());
        assert_eq!(status, "Active channel: #a");
        assert_eq!(state.current_channel.as_deref(), Some("#a"));
    }

    #[tokio::test]
    async fn test_switch_report_offline() {
        let mut state = ClientState::new("alice", CodePage::Utf8);
        let mut transport = MockTransport::default();
        let (_, status) = run_line(CommandKind::Switch, &[], &mut state, &mut transport).await;
        assert_eq!(status, "Active channel: none\nJoined channels: none");
    }

    #[tokio::test]
    async fn test_names_needs_active_channel() {
        let mut state = connected_state();
        let mut transport = MockTransport::connected();
        let (wire, status) = run_line(CommandKind::Names, &[], &mut state, &mut transport).await;
        assert!(wire.is_empty());
        assert_eq!(status, "No active channel");

        run_line(CommandKind::Join, &["#a"], &mut state, &mut transport).await;
        let (wire, _) = run_line(CommandKind::Names, &[], &mut state, &mut transport).await;
        assert_eq!(wire, "NAMES #a\r\n");
    }
}
