//! Message source prefixes.
//!
//! A prefix names the origin of a line: either a server name or a user's
//! `nick!user@host` mask. Rendering only ever shows the leading name, so the
//! `!user@host` suffix is split off here.

/// A borrowed prefix, split into its components.
///
/// Parsing is lenient: the name is everything before the first `!` or `@`,
/// the user everything between `!` and `@`, and the host everything after `@`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrefixRef<'a> {
    /// Nickname or server name.
    pub name: &'a str,
    /// Username (ident), if present.
    pub user: Option<&'a str>,
    /// Hostname, if present.
    pub host: Option<&'a str>,
}

impl<'a> PrefixRef<'a> {
    /// Split a prefix (without the leading `:`).
    ///
    /// ```
    /// use slirc_proto::PrefixRef;
    ///
    /// let prefix = PrefixRef::parse("nick!user@host.example");
    /// assert_eq!(prefix.name, "nick");
    /// assert_eq!(prefix.user, Some("user"));
    /// assert_eq!(prefix.host, Some("host.example"));
    /// ```
    pub fn parse(s: &'a str) -> Self {
        let (front, host) = match s.split_once('@') {
            Some((front, host)) => (front, Some(host)),
            None => (s, None),
        };
        let (name, user) = match front.split_once('!') {
            Some((name, user)) => (name, Some(user)),
            None => (front, None),
        };

        Self { name, user, host }
    }

    /// The nickname, or `None` when the name is empty.
    pub fn nickname(&self) -> Option<&'a str> {
        (!self.name.is_empty()).then_some(self.name)
    }
}
