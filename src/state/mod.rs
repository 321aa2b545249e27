//! Session state owned by the session task.
//!
//! `ClientState` is the single record of identity, connection and channel
//! membership. Only the session task holds it; commands mutate it through
//! the helpers below and server events describe their changes as
//! [`StateEffect`] values that the session applies after rendering.

use std::collections::{BTreeMap, BTreeSet};

use slirc_proto::CodePage;
use tracing::debug;

/// A state change requested by a server event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateEffect {
    /// The server refused the active channel; forget it.
    DropCurrentChannel,
    /// The server refused a joined channel that is not active.
    DropChannel(String),
    /// The server refused the last nickname change.
    RollbackNickname,
    /// The server confirmed our own nickname change.
    AdoptNickname(String),
    /// Registration finished; re-join channels restored from the favourite.
    Rejoin,
}

/// Identity, connection and membership facts for one client.
#[derive(Debug, Clone)]
pub struct ClientState {
    pub nickname: String,
    /// Nickname held before the last change, restored on rejection.
    pub previous_nickname: String,
    pub code_page: CodePage,
    /// Lower-cased host of the live connection.
    pub hostname: Option<String>,
    pub is_connected: bool,
    /// `false` is terminal: the session loop stops.
    pub is_running: bool,
    pub current_channel: Option<String>,
    /// Lower-cased channel names.
    pub joined_channels: BTreeSet<String>,
    /// Favourite host -> comma-joined channel list.
    pub favourite_servers: BTreeMap<String, String>,
    /// Channels restored on connect that still need a `JOIN`.
    pub pending_rejoin: BTreeSet<String>,
}

impl ClientState {
    pub fn new(nickname: impl Into<String>, code_page: CodePage) -> Self {
        let nickname = nickname.into();
        Self {
            previous_nickname: nickname.clone(),
            nickname,
            code_page,
            hostname: None,
            is_connected: false,
            is_running: true,
            current_channel: None,
            joined_channels: BTreeSet::new(),
            favourite_servers: BTreeMap::new(),
            pending_rejoin: BTreeSet::new(),
        }
    }

    pub fn is_joined(&self, channel: &str) -> bool {
        self.joined_channels.contains(&channel.to_lowercase())
    }

    /// Whether the current host is stored as a favourite.
    pub fn is_favourite(&self) -> bool {
        self.hostname
            .as_ref()
            .is_some_and(|host| self.favourite_servers.contains_key(host))
    }

    /// Record a live connection and restore the host's favourite channels.
    pub fn mark_connected(&mut self, host: &str) {
        let host = host.to_lowercase();
        self.joined_channels = self
            .favourite_servers
            .get(&host)
            .map(|list| parse_channel_list(list.as_str()))
            .unwrap_or_default();
        self.pending_rejoin = self.joined_channels.clone();
        self.current_channel = None;
        self.hostname = Some(host);
        self.is_connected = true;
    }

    /// Forget the connection. A favourite host remembers its channels.
    ///
    /// Returns the host that was connected, if any.
    pub fn reset_connection(&mut self) -> Option<String> {
        let host = self.hostname.take();
        if let Some(saved) = host
            .as_ref()
            .and_then(|h| self.favourite_servers.get_mut(h))
        {
            *saved = join_channel_list(&self.joined_channels);
            debug!(host = ?host, channels = %saved, "Stored favourite channels");
        }
        self.is_connected = false;
        self.joined_channels.clear();
        self.pending_rejoin.clear();
        self.current_channel = None;
        host
    }

    /// Enter the terminal state.
    pub fn stop(&mut self) {
        self.reset_connection();
        self.is_running = false;
    }

    /// Join a channel and make it active. Returns the stored name.
    pub fn join_channel(&mut self, channel: &str) -> String {
        let channel = channel.to_lowercase();
        self.joined_channels.insert(channel.clone());
        self.current_channel = Some(channel.clone());
        channel
    }

    /// Leave the active channel, returning it.
    pub fn leave_current(&mut self) -> Option<String> {
        let channel = self.current_channel.take()?;
        self.forget_channel(&channel);
        Some(channel)
    }

    /// Forget any joined channel. The active channel is cleared if it matches.
    pub fn leave_channel(&mut self, channel: &str) -> bool {
        let channel = channel.to_lowercase();
        if self.current_channel.as_deref() == Some(channel.as_str()) {
            self.current_channel = None;
        }
        self.forget_channel(&channel)
    }

    fn forget_channel(&mut self, channel: &str) -> bool {
        self.pending_rejoin.remove(channel);
        self.joined_channels.remove(channel)
    }

    pub fn switch_to(&mut self, channel: &str) {
        self.current_channel = Some(channel.to_lowercase());
    }

    pub fn set_nickname(&mut self, nickname: impl Into<String>) {
        self.previous_nickname = std::mem::replace(&mut self.nickname, nickname.into());
    }

    /// Comma-joined membership, in sorted order.
    pub fn channel_list(&self) -> String {
        join_channel_list(&self.joined_channels)
    }

    /// Apply an event's effect. Returns wire lines (without terminator) the
    /// session must send in response.
    pub fn apply(&mut self, effect: StateEffect) -> Vec<String> {
        match effect {
            StateEffect::DropCurrentChannel => {
                if let Some(channel) = self.leave_current() {
                    debug!(channel = %channel, "Server refused channel");
                }
                Vec::new()
            }
            StateEffect::DropChannel(channel) => {
                if self.leave_channel(&channel) {
                    debug!(channel = %channel, "Server refused channel");
                }
                Vec::new()
            }
            StateEffect::RollbackNickname => {
                debug!(
                    rejected = %self.nickname,
                    restored = %self.previous_nickname,
                    "Server refused nickname"
                );
                self.nickname = self.previous_nickname.clone();
                Vec::new()
            }
            StateEffect::AdoptNickname(nickname) => {
                if nickname != self.nickname {
                    self.set_nickname(nickname);
                }
                Vec::new()
            }
            StateEffect::Rejoin => std::mem::take(&mut self.pending_rejoin)
                .into_iter()
                .filter(|channel| self.joined_channels.contains(channel))
                .map(|channel| format!("JOIN {channel}"))
                .collect(),
        }
    }

    /// Check the membership invariants.
    pub fn invariants_hold(&self) -> bool {
        let current_joined = self
            .current_channel
            .as_ref()
            .is_none_or(|c| self.joined_channels.contains(c));
        let offline_empty = self.is_connected
            || (self.joined_channels.is_empty()
                && self.current_channel.is_none()
                && self.pending_rejoin.is_empty());
        current_joined && offline_empty
    }
}

fn parse_channel_list(list: &str) -> BTreeSet<String> {
    list.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn join_channel_list(channels: &BTreeSet<String>) -> String {
    channels.iter().map(String::as_str).collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected() -> ClientState {
        let mut state = ClientState::new("alice", CodePage::Utf8);
        state.mark_connected("IRC.Example.NET");
        state
    }

    #[test]
    fn test_mark_connected_lowercases_host() {
        let state = connected();
        assert_eq!(state.hostname.as_deref(), Some("irc.example.net"));
        assert!(state.is_connected);
        assert!(state.invariants_hold());
    }

    #[test]
    fn test_join_and_leave() {
        let mut state = connected();
        assert_eq!(state.join_channel("#Rust"), "#rust");
        assert!(state.is_joined("#RUST"));
        assert_eq!(state.current_channel.as_deref(), Some("#rust"));

        assert_eq!(state.leave_current().as_deref(), Some("#rust"));
        assert!(state.joined_channels.is_empty());
        assert!(state.current_channel.is_none());
        assert_eq!(state.leave_current(), None);
    }

    #[test]
    fn test_reset_stores_favourite_channels() {
        let mut state = ClientState::new("alice", CodePage::Utf8);
        state
            .favourite_servers
            .insert("irc.example.net".into(), String::new());
        state.mark_connected("irc.example.net");
        state.join_channel("#b");
        state.join_channel("#a");

        assert_eq!(state.reset_connection().as_deref(), Some("irc.example.net"));
        assert_eq!(state.favourite_servers["irc.example.net"], "#a,#b");
        assert!(state.invariants_hold());

        state.mark_connected("irc.example.net");
        assert!(state.is_joined("#a") && state.is_joined("#b"));
        assert!(state.current_channel.is_none());
    }

    #[test]
    fn test_reset_ignores_non_favourite() {
        let mut state = connected();
        state.join_channel("#a");
        state.reset_connection();
        assert!(state.favourite_servers.is_empty());
    }

    #[test]
    fn test_drop_current_channel() {
        let mut state = connected();
        state.join_channel("#keep");
        state.join_channel("#test");
        assert!(state.apply(StateEffect::DropCurrentChannel).is_empty());
        assert!(!state.is_joined("#test"));
        assert!(state.is_joined("#keep"));
        assert!(state.current_channel.is_none());
    }

    #[test]
    fn test_nickname_rollback_and_adopt() {
        let mut state = connected();
        state.set_nickname("bob");
        assert_eq!(state.previous_nickname, "alice");
        state.apply(StateEffect::RollbackNickname);
        assert_eq!(state.nickname, "alice");

        state.apply(StateEffect::AdoptNickname("carol".into()));
        assert_eq!(state.nickname, "carol");
        assert_eq!(state.previous_nickname, "alice");
    }

    #[test]
    fn test_rejoin_lines() {
        let mut state = ClientState::new("alice", CodePage::Utf8);
        state
            .favourite_servers
            .insert("irc.example.net".into(), "#one, #Two,".into());
        state.mark_connected("irc.example.net");
        assert_eq!(
            state.apply(StateEffect::Rejoin),
            vec!["JOIN #one".to_string(), "JOIN #two".to_string()]
        );
        assert!(state.apply(StateEffect::Rejoin).is_empty());
    }

    #[test]
    fn test_rejoin_skips_channels_joined_by_hand() {
        let mut state = ClientState::new("alice", CodePage::Utf8);
        state
            .favourite_servers
            .insert("irc.example.net".into(), "#saved".into());
        state.mark_connected("irc.example.net");
        state.join_channel("#typed");
        assert_eq!(state.apply(StateEffect::Rejoin), vec!["JOIN #saved".to_string()]);

        let mut plain = connected();
        plain.join_channel("#typed");
        assert!(plain.apply(StateEffect::Rejoin).is_empty());
    }

    #[test]
    fn test_drop_restored_channel() {
        let mut state = ClientState::new("alice", CodePage::Utf8);
        state
            .favourite_servers
            .insert("irc.example.net".into(), "#banned,#ok".into());
        state.mark_connected("irc.example.net");
        state.join_channel("#here");

        state.apply(StateEffect::DropChannel("#Banned".into()));
        assert!(!state.is_joined("#banned"));
        assert!(state.is_joined("#ok"));
        assert_eq!(state.current_channel.as_deref(), Some("#here"));
        assert!(state.invariants_hold());

        state.reset_connection();
        assert_eq!(state.favourite_servers["irc.example.net"], "#here,#ok");
    }

    #[test]
    fn test_stop_is_terminal() {
        let mut state = connected();
        state.join_channel("#a");
        state.stop();
        assert!(!state.is_running);
        assert!(!state.is_connected);
        assert!(state.hostname.is_none());
        assert!(state.invariants_hold());
    }
}
