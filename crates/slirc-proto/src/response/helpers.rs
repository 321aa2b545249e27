//! Code conversion and classification for [`Response`].

use super::Response;

impl Response {
    /// Returns the numeric code as u16
    #[inline]
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Creates a Response from a numeric code
    pub fn from_code(code: u16) -> Option<Response> {
        let resp = match code {
            1 => Response::RPL_WELCOME,
            322 => Response::RPL_LIST,
            323 => Response::RPL_LISTEND,
            353 => Response::RPL_NAMREPLY,
            366 => Response::RPL_ENDOFNAMES,
            403 => Response::ERR_NOSUCHCHANNEL,
            405 => Response::ERR_TOOMANYCHANNELS,
            432 => Response::ERR_ERRONEOUSNICKNAME,
            433 => Response::ERR_NICKNAMEINUSE,
            442 => Response::ERR_NOTONCHANNEL,
            470 => Response::ERR_LINKCHANNEL,
            471 => Response::ERR_CHANNELISFULL,
            473 => Response::ERR_INVITEONLYCHAN,
            474 => Response::ERR_BANNEDFROMCHAN,
            475 => Response::ERR_BADCHANNELKEY,
            477 => Response::ERR_NEEDREGGEDNICK,
            478 => Response::ERR_BANLISTFULL,
            _ => return None,
        };
        Some(resp)
    }

    /// Errors meaning the active channel is not (or no longer) joined.
    pub fn is_channel_error(&self) -> bool {
        matches!(
            self,
            Response::ERR_NOSUCHCHANNEL
                | Response::ERR_TOOMANYCHANNELS
                | Response::ERR_NOTONCHANNEL
                | Response::ERR_LINKCHANNEL
                | Response::ERR_CHANNELISFULL
                | Response::ERR_INVITEONLYCHAN
                | Response::ERR_BANNEDFROMCHAN
                | Response::ERR_BADCHANNELKEY
                | Response::ERR_NEEDREGGEDNICK
                | Response::ERR_BANLISTFULL
        )
    }

    /// Errors meaning the requested nickname was refused.
    pub fn is_nickname_error(&self) -> bool {
        matches!(
            self,
            Response::ERR_ERRONEOUSNICKNAME | Response::ERR_NICKNAMEINUSE
        )
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03}", self.code())
    }
}
