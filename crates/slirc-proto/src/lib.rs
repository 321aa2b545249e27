//! # slirc-proto
//!
//! The wire layer of the slirc client. It knows nothing about sessions or
//! users; it turns bytes into lines, lines into tokens, and numerics into
//! meaning.
//!
//! ## Features
//!
//! - Structured line tokenizer ([`MessageRef`]) with prefix splitting
//! - Numeric reply codes used by the client ([`Response`])
//! - Nickname grammar ([`NickExt`])
//! - Code pages for wire text ([`CodePage`])
//! - Optional Tokio line framing ([`LineCodec`])
//!
//! ## Quick Start
//!
//! ```rust
//! use slirc_proto::MessageRef;
//!
//! let msg = MessageRef::parse(":nick!user@host PRIVMSG #channel :Hello!").unwrap();
//! assert_eq!(msg.command_name(), "PRIVMSG");
//! assert_eq!(msg.source_nickname(), Some("nick"));
//! assert_eq!(msg.arg(0), Some("#channel"));
//! assert_eq!(msg.trailing(), Some("Hello!"));
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod encoding;
pub mod error;
#[cfg(feature = "tokio")]
pub mod line;
pub mod message;
pub mod nick;
pub mod prefix;
pub mod response;

pub use self::encoding::CodePage;
pub use self::error::{MessageParseError, ProtocolError};
#[cfg(feature = "tokio")]
pub use self::line::{LineCodec, MAX_LINE_LEN};
pub use self::message::{numeric_code, MessageRef};
pub use self::nick::{NickExt, DEFAULT_NICK_MAX_LEN};
pub use self::prefix::PrefixRef;
pub use self::response::Response;

/// Line terminator used on the wire in both directions.
pub const CRLF: &str = "\r\n";
