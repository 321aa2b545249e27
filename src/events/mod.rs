//! Server events.
//!
//! Inbound lines are split by [`classify`] into [`ServerEvent`]s, one per
//! recognised verb. Rendering is pure; state changes are returned by
//! [`ServerEvent::effect`] and applied by the session afterwards.

mod classify;
mod keepalive;

use slirc_proto::{MessageRef, Response, numeric_code};

use crate::state::{ClientState, StateEffect};

pub use classify::classify;
pub use keepalive::pong_reply;

/// Recognised inbound verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Join,
    Part,
    Nick,
    Mode,
    PrivateMessage,
    Notice,
    /// A numeric reply, carrying its code.
    Service(u16),
}

impl EventKind {
    /// Look up a verb token. Numerics are exactly three digits.
    pub fn from_verb(verb: &str) -> Option<Self> {
        let kind = match verb.to_ascii_uppercase().as_str() {
            "JOIN" => Self::Join,
            "PART" => Self::Part,
            "NICK" => Self::Nick,
            "MODE" => Self::Mode,
            "PRIVMSG" => Self::PrivateMessage,
            "NOTICE" => Self::Notice,
            _ => Self::Service(numeric_code(verb)?),
        };
        Some(kind)
    }
}

/// Fields captured from a line that matched its grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Payload {
    Join { sender: String, channel: String },
    Part { sender: String, channel: String },
    Nick { sender: String, nickname: String },
    Mode { sender: String, target: String, flag: String },
    PrivateMessage { sender: String, target: String, text: String },
    Notice { sender: String, text: String },
    Service {
        sender: String,
        /// Second argument, the channel for channel-error numerics.
        subject: Option<String>,
        text: String,
    },
}

/// One received line, parsed against its verb's grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEvent {
    kind: EventKind,
    raw: String,
    payload: Option<Payload>,
}

impl ServerEvent {
    /// Parse `raw` (terminator removed) as an event of `kind`. A line that
    /// does not fit the grammar is kept and renders verbatim.
    pub fn parse(kind: EventKind, raw: &str) -> Self {
        let payload = MessageRef::parse(raw)
            .ok()
            .and_then(|msg| capture(kind, &msg));
        Self {
            kind,
            raw: raw.to_string(),
            payload,
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether the line matched its grammar.
    pub fn is_parsed(&self) -> bool {
        self.payload.is_some()
    }

    /// Display text for the view.
    pub fn render(&self) -> String {
        let Some(payload) = &self.payload else {
            return self.raw.clone();
        };

        match payload {
            Payload::Join { sender, channel } => format!("{sender} joined {channel}"),
            Payload::Part { sender, channel } => format!("{sender} left {channel}"),
            Payload::Nick { sender, nickname } => format!("{sender} renamed to {nickname}"),
            Payload::Mode {
                sender,
                target,
                flag,
            } => {
                if target == sender {
                    format!("{sender} set own flag {flag}")
                } else {
                    format!("{sender} set flag {flag} for {target}")
                }
            }
            Payload::PrivateMessage {
                sender,
                target,
                text,
            } => format!("[{target}] <{sender}>: {text}"),
            Payload::Notice { sender, text } | Payload::Service { sender, text, .. } => {
                format!("[{sender}] >> {text}")
            }
        }
    }

    /// The state change this event asks for. Unparsed lines ask for none.
    pub fn effect(&self, state: &ClientState) -> Option<StateEffect> {
        match (&self.payload, self.kind) {
            (Some(Payload::Service { subject, .. }), EventKind::Service(code)) => {
                let response = Response::from_code(code)?;
                if response.is_channel_error() {
                    Some(channel_error_effect(subject.as_deref(), state))
                } else if response.is_nickname_error() {
                    Some(StateEffect::RollbackNickname)
                } else if response == Response::RPL_WELCOME {
                    Some(StateEffect::Rejoin)
                } else {
                    None
                }
            }
            (Some(Payload::Nick { sender, nickname }), _) if *sender == state.nickname => {
                Some(StateEffect::AdoptNickname(nickname.clone()))
            }
            _ => None,
        }
    }
}

/// A refusal naming a joined channel other than the active one drops that
/// channel; anything else drops the active channel.
fn channel_error_effect(subject: Option<&str>, state: &ClientState) -> StateEffect {
    match subject.map(str::to_lowercase) {
        Some(channel)
            if state.joined_channels.contains(&channel)
                && state.current_channel.as_deref() != Some(channel.as_str()) =>
        {
            StateEffect::DropChannel(channel)
        }
        _ => StateEffect::DropCurrentChannel,
    }
}

fn non_empty(s: Option<&str>) -> Option<String> {
    s.filter(|s| !s.is_empty()).map(str::to_string)
}

/// Match a tokenized line against the grammar for `kind`.
fn capture(kind: EventKind, msg: &MessageRef<'_>) -> Option<Payload> {
    let sender = msg.source_nickname()?.to_string();

    let payload = match kind {
        EventKind::Join => Payload::Join {
            sender,
            channel: non_empty(msg.arg(0))?,
        },
        EventKind::Part => Payload::Part {
            sender,
            channel: non_empty(msg.arg(0))?,
        },
        EventKind::Nick => Payload::Nick {
            sender,
            nickname: non_empty(msg.arg(0))?,
        },
        EventKind::Mode => Payload::Mode {
            sender,
            target: non_empty(msg.arg(0))?,
            flag: non_empty(msg.arg(1).map(strip_marker))?,
        },
        EventKind::PrivateMessage => {
            if msg.args().len() < 2 {
                return None;
            }
            Payload::PrivateMessage {
                sender,
                target: non_empty(msg.arg(0))?,
                text: non_empty(msg.trailing())?,
            }
        }
        EventKind::Notice => {
            if msg.args().len() < 2 {
                return None;
            }
            Payload::Notice {
                sender,
                text: non_empty(msg.trailing())?,
            }
        }
        EventKind::Service(_) => {
            non_empty(msg.arg(0))?;
            Payload::Service {
                sender,
                subject: non_empty(msg.arg(1)),
                text: non_empty(msg.rest_after(1).map(strip_marker))?,
            }
        }
    };
    Some(payload)
}

fn strip_marker(s: &str) -> &str {
    s.strip_prefix(':').unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use slirc_proto::CodePage;

    fn event(raw: &str) -> ServerEvent {
        let verb = raw.split_whitespace().nth(1).unwrap();
        ServerEvent::parse(EventKind::from_verb(verb).unwrap(), raw)
    }

    fn in_channel(channel: &str) -> ClientState {
        let mut state = ClientState::new("alice", CodePage::Utf8);
        state.mark_connected("irc.example.net");
        state.join_channel(channel);
        state
    }

    #[test]
    fn test_from_verb() {
        assert_eq!(EventKind::from_verb("PRIVMSG"), Some(EventKind::PrivateMessage));
        assert_eq!(EventKind::from_verb("notice"), Some(EventKind::Notice));
        assert_eq!(EventKind::from_verb("474"), Some(EventKind::Service(474)));
        assert_eq!(EventKind::from_verb("4744"), None);
        assert_eq!(EventKind::from_verb("PING"), None);
        assert_eq!(EventKind::from_verb("USER"), None);
    }

    #[test]
    fn test_render_named_events() {
        assert_eq!(event(":bob!u@h JOIN :#rust").render(), "bob joined #rust");
        assert_eq!(event(":bob!u@h JOIN #rust").render(), "bob joined #rust");
        assert_eq!(event(":bob!u@h PART #rust :bye").render(), "bob left #rust");
        assert_eq!(event(":bob!u@h NICK :robert").render(), "bob renamed to robert");
        assert_eq!(
            event(":a!b@c PRIVMSG #x :hello world").render(),
            "[#x] <a>: hello world"
        );
        assert_eq!(
            event(":irc.example.net NOTICE * :*** Looking up your hostname").render(),
            "[irc.example.net] >> *** Looking up your hostname"
        );
    }

    #[test]
    fn test_render_mode() {
        assert_eq!(event(":alice MODE alice :+i").render(), "alice set own flag +i");
        assert_eq!(
            event(":bob!u@h MODE #rust +o alice").render(),
            "bob set flag +o for #rust"
        );
        assert_eq!(
            event(":bob!u@h MODE #rust :+m").render(),
            "bob set flag +m for #rust"
        );
    }

    #[test]
    fn test_render_service() {
        assert_eq!(
            event(":irc.example.net 001 alice :Welcome to the network").render(),
            "[irc.example.net] >> Welcome to the network"
        );
        assert_eq!(
            event(":srv 353 alice = #rust :alice bob").render(),
            "[srv] >> = #rust :alice bob"
        );
    }

    #[test]
    fn test_unmatched_grammar_renders_raw() {
        let ev = event(":bob PRIVMSG #rust");
        assert!(!ev.is_parsed());
        assert_eq!(ev.render(), ":bob PRIVMSG #rust");

        let ev = event(":srv 474 alice");
        assert!(!ev.is_parsed());
        assert_eq!(ev.effect(&in_channel("#test")), None);
    }

    #[test]
    fn test_channel_error_drops_current() {
        let mut state = in_channel("#test");
        let ev = event(":srv 474 alice #test :Cannot join channel (+b)");
        let effect = ev.effect(&state).unwrap();
        assert_eq!(effect, StateEffect::DropCurrentChannel);

        state.apply(effect);
        assert!(state.current_channel.is_none());
        assert!(!state.joined_channels.contains("#test"));
    }

    #[test]
    fn test_every_channel_error_code() {
        let state = in_channel("#test");
        for code in [403, 405, 442, 470, 471, 473, 474, 475, 477, 478] {
            let ev = event(&format!(":srv {code} alice #test :refused"));
            assert_eq!(ev.effect(&state), Some(StateEffect::DropCurrentChannel), "{code}");
        }
    }

    #[test]
    fn test_channel_error_for_restored_channel() {
        let mut state = ClientState::new("alice", CodePage::Utf8);
        state
            .favourite_servers
            .insert("irc.example.net".into(), "#banned,#ok".into());
        state.mark_connected("irc.example.net");

        let ev = event(":srv 474 alice #Banned :Cannot join channel (+b)");
        assert_eq!(
            ev.effect(&state),
            Some(StateEffect::DropChannel("#banned".into()))
        );

        // The active channel still wins when the numeric names it or nothing joined.
        state.join_channel("#ok");
        let ev = event(":srv 474 alice #ok :Cannot join channel (+b)");
        assert_eq!(ev.effect(&state), Some(StateEffect::DropCurrentChannel));
        let ev = event(":srv 403 alice #nowhere :No such channel");
        assert_eq!(ev.effect(&state), Some(StateEffect::DropCurrentChannel));
    }

    #[test]
    fn test_nickname_conflict_rolls_back() {
        let mut state = in_channel("#test");
        state.set_nickname("bob");
        let ev = event(":srv 433 alice bob :Nickname is already in use");
        let effect = ev.effect(&state).unwrap();
        assert_eq!(effect, StateEffect::RollbackNickname);
        state.apply(effect);
        assert_eq!(state.nickname, "alice");
    }

    #[test]
    fn test_own_nick_change_is_adopted() {
        let state = in_channel("#test");
        assert_eq!(
            event(":alice!u@h NICK :Guest42").effect(&state),
            Some(StateEffect::AdoptNickname("Guest42".into()))
        );
        assert_eq!(event(":bob!u@h NICK :carol").effect(&state), None);
    }

    #[test]
    fn test_welcome_requests_rejoin() {
        let state = in_channel("#test");
        let ev = event(":srv 001 alice :Welcome");
        assert_eq!(ev.effect(&state), Some(StateEffect::Rejoin));
        assert_eq!(event(":srv 322 alice #rust 5 :topic").effect(&state), None);
    }
}
