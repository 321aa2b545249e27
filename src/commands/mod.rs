//! User commands.
//!
//! Every slash-command is one [`CommandKind`]. A [`Command`] is built fresh
//! for each input line by the [`Registry`], validated against the current
//! [`ClientState`], then executed to produce a wire line and a status text.
//!
//! Families:
//! - `connection`: `/server`, `/quit`, `/exit`
//! - `nick`: `/nick`
//! - `channel`: `/join`, `/leave`, `/switch`, `/names`, `/list`
//! - `messaging`: `/pm` and free text
//! - `favourites`: `/add`, `/fav`
//! - `settings`: `/chcp`, `/help`

mod channel;
mod connection;
mod favourites;
mod messaging;
mod nick;
mod registry;
mod settings;

use std::time::Duration;

use slirc_proto::CRLF;
use tracing::{Instrument, debug};

use crate::error::{CommandError, CommandResult};
use crate::network::Transport;
use crate::state::ClientState;
use crate::telemetry::spans;

pub use registry::Registry;

/// Prefix that marks input as a command.
pub const COMMAND_PREFIX: char = '/';

/// Everything a command may touch while executing.
pub struct Context<'a> {
    pub state: &'a mut ClientState,
    pub transport: &'a mut dyn Transport,
    pub connect_timeout: Duration,
}

/// Result of a successful execution.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Reply {
    /// Wire line(s), without the final terminator.
    pub wire: Option<String>,
    pub status: String,
}

impl Reply {
    pub fn wire(line: impl Into<String>) -> Self {
        Self {
            wire: Some(line.into()),
            status: String::new(),
        }
    }

    pub fn status(text: impl Into<String>) -> Self {
        Self {
            wire: None,
            status: text.into(),
        }
    }

    pub fn with_status(mut self, text: impl Into<String>) -> Self {
        self.status = text.into();
        self
    }
}

/// One variant per verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Connect,
    Disconnect,
    ChangeNick,
    Join,
    Leave,
    Switch,
    Names,
    List,
    PrivateMessage,
    AddFavourite,
    ShowFavourites,
    ChangeCodePage,
    Help,
    Exit,
    Unknown,
}

impl CommandKind {
    /// Every verb-bearing kind, in help order.
    pub const ALL: [CommandKind; 14] = [
        CommandKind::Connect,
        CommandKind::Disconnect,
        CommandKind::ChangeNick,
        CommandKind::Join,
        CommandKind::Leave,
        CommandKind::Switch,
        CommandKind::Names,
        CommandKind::List,
        CommandKind::PrivateMessage,
        CommandKind::AddFavourite,
        CommandKind::ShowFavourites,
        CommandKind::ChangeCodePage,
        CommandKind::Help,
        CommandKind::Exit,
    ];

    /// The slash-verb that selects this kind.
    pub fn verb(self) -> &'static str {
        match self {
            Self::Connect => "/server",
            Self::Disconnect => "/quit",
            Self::ChangeNick => "/nick",
            Self::Join => "/join",
            Self::Leave => "/leave",
            Self::Switch => "/switch",
            Self::Names => "/names",
            Self::List => "/list",
            Self::PrivateMessage => "/pm",
            Self::AddFavourite => "/add",
            Self::ShowFavourites => "/fav",
            Self::ChangeCodePage => "/chcp",
            Self::Help => "/help",
            Self::Exit => "/exit",
            Self::Unknown => "",
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            Self::Connect => "/server HOST [PORT]",
            Self::Disconnect => "/quit",
            Self::ChangeNick => "/nick NAME",
            Self::Join => "/join CHANNEL [PASSWORD]",
            Self::Leave => "/leave",
            Self::Switch => "/switch [CHANNEL]",
            Self::Names => "/names",
            Self::List => "/list",
            Self::PrivateMessage => "/pm TARGET TEXT...",
            Self::AddFavourite => "/add",
            Self::ShowFavourites => "/fav",
            Self::ChangeCodePage => "/chcp ENCODING",
            Self::Help => "/help",
            Self::Exit => "/exit",
            Self::Unknown => "",
        }
    }

    /// Accepted argument counts, verb excluded. Fixed-arity kinds accept
    /// exactly the number of tokens their usage names.
    fn arity(self) -> (usize, Option<usize>) {
        match self {
            Self::Connect | Self::Join => (1, Some(2)),
            Self::ChangeNick | Self::ChangeCodePage => (1, Some(1)),
            Self::Switch => (0, Some(1)),
            Self::PrivateMessage => (2, None),
            Self::Unknown => (0, None),
            _ => (0, Some(0)),
        }
    }

    fn check_arity(self, count: usize) -> CommandResult {
        let (min, max) = self.arity();
        if count < min || max.is_some_and(|max| count > max) {
            return Err(CommandError::Usage(self.usage()));
        }
        Ok(())
    }
}

/// The argument at `index`, or the kind's usage as the error.
fn required(args: &[String], index: usize, kind: CommandKind) -> Result<&str, CommandError> {
    args.get(index)
        .map(String::as_str)
        .ok_or(CommandError::Usage(kind.usage()))
}

/// A single parsed input line.
#[derive(Debug, Clone)]
pub struct Command {
    kind: CommandKind,
    args: Vec<String>,
    output: String,
}

impl Command {
    pub fn new(kind: CommandKind, args: Vec<String>) -> Self {
        Self {
            kind,
            args,
            output: String::new(),
        }
    }

    /// A command that does nothing.
    pub fn unknown() -> Self {
        Self::new(CommandKind::Unknown, Vec::new())
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Status text set by the last `validate` or `execute`.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Check arguments and preconditions. On failure `output` holds the
    /// reason and the command must not be executed.
    pub fn validate(&mut self, state: &ClientState) -> bool {
        let result = self
            .kind
            .check_arity(self.args.len())
            .and_then(|()| self.check(state));

        match result {
            Ok(()) => true,
            Err(e) => {
                debug!(verb = self.kind.verb(), code = e.error_code(), "Command rejected");
                self.output = e.to_string();
                false
            }
        }
    }

    fn check(&self, state: &ClientState) -> CommandResult {
        let args = &self.args;
        match self.kind {
            CommandKind::Connect => connection::validate_connect(args, state),
            CommandKind::Disconnect => connection::validate_disconnect(state),
            CommandKind::ChangeNick => nick::validate(args),
            CommandKind::Join => channel::validate_join(args, state),
            CommandKind::Leave => channel::validate_leave(state),
            CommandKind::Switch => channel::validate_switch(args, state),
            CommandKind::Names => channel::validate_names(state),
            CommandKind::AddFavourite => favourites::validate_add(state),
            CommandKind::ChangeCodePage => settings::validate_chcp(args),
            CommandKind::List
            | CommandKind::PrivateMessage
            | CommandKind::ShowFavourites
            | CommandKind::Help
            | CommandKind::Exit
            | CommandKind::Unknown => Ok(()),
        }
    }

    /// Perform the command. Returns the wire line without terminator.
    ///
    /// Only call after a successful [`validate`](Self::validate).
    pub async fn execute(&mut self, ctx: &mut Context<'_>) -> Option<String> {
        let args = &self.args;
        let result = match self.kind {
            CommandKind::Connect => connection::connect(args, ctx).await,
            CommandKind::Disconnect => connection::disconnect(ctx).await,
            CommandKind::Exit => connection::exit(ctx).await,
            CommandKind::ChangeNick => nick::change(args, ctx.state),
            CommandKind::Join => channel::join(args, ctx.state),
            CommandKind::Leave => channel::leave(ctx.state),
            CommandKind::Switch => channel::switch(args, ctx.state),
            CommandKind::Names => channel::names(ctx.state),
            CommandKind::List => Ok(Reply::wire("LIST")),
            CommandKind::PrivateMessage => messaging::private_message(args),
            CommandKind::AddFavourite => favourites::add(ctx.state),
            CommandKind::ShowFavourites => favourites::show(ctx.state),
            CommandKind::ChangeCodePage => settings::chcp(args, ctx.state),
            CommandKind::Help => Ok(Reply::status(settings::help_text())),
            CommandKind::Unknown => Ok(Reply::default()),
        };

        match result {
            Ok(reply) => {
                self.output = reply.status;
                reply.wire
            }
            Err(e) => {
                debug!(verb = self.kind.verb(), code = e.error_code(), "Command failed");
                self.output = e.to_string();
                None
            }
        }
    }

    /// Validate, then execute. Returns the terminated wire text, or an
    /// empty string when nothing should be sent.
    pub async fn run(&mut self, ctx: &mut Context<'_>) -> String {
        if !self.validate(ctx.state) {
            return String::new();
        }

        let span = spans::command(self.kind.verb(), ctx.state.current_channel.as_deref());
        match self.execute(ctx).instrument(span).await {
            Some(line) if !line.is_empty() => line + CRLF,
            _ => String::new(),
        }
    }
}
