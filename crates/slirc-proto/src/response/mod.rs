//! Numeric reply codes the client reacts to.
//!
//! Any three-digit code is displayed; only the codes listed here carry
//! meaning for session state.
//!
//! # Reference
//! - RFC 2812 Section 5: Replies
//! - Modern IRC documentation: <https://modern.ircdocs.horse/>

#![allow(non_camel_case_types)]

mod helpers;

/// IRC server response code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
#[non_exhaustive]
pub enum Response {
    // === Connection Registration ===
    /// 001 - Welcome to the IRC network
    RPL_WELCOME = 1,

    // === Command Replies ===
    /// 322 - Channel list entry
    RPL_LIST = 322,
    /// 323 - End of channel list
    RPL_LISTEND = 323,
    /// 353 - Names reply
    RPL_NAMREPLY = 353,
    /// 366 - End of names
    RPL_ENDOFNAMES = 366,

    // === Error Replies ===
    /// 403 - No such channel
    ERR_NOSUCHCHANNEL = 403,
    /// 405 - Joined too many channels
    ERR_TOOMANYCHANNELS = 405,
    /// 432 - Erroneous nickname
    ERR_ERRONEOUSNICKNAME = 432,
    /// 433 - Nickname in use
    ERR_NICKNAMEINUSE = 433,
    /// 442 - Not on channel
    ERR_NOTONCHANNEL = 442,
    /// 470 - Forwarded to another channel
    ERR_LINKCHANNEL = 470,
    /// 471 - Channel is full (+l)
    ERR_CHANNELISFULL = 471,
    /// 473 - Invite only channel (+i)
    ERR_INVITEONLYCHAN = 473,
    /// 474 - Banned from channel (+b)
    ERR_BANNEDFROMCHAN = 474,
    /// 475 - Bad channel key (+k)
    ERR_BADCHANNELKEY = 475,
    /// 477 - Registered nickname required
    ERR_NEEDREGGEDNICK = 477,
    /// 478 - Ban list full
    ERR_BANLISTFULL = 478,
}
