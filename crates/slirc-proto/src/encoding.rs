//! Code pages for wire text.
//!
//! The client encodes outgoing lines and decodes incoming bytes with a
//! user-selectable code page. The set is fixed; names follow the spelling
//! users type in `/chcp`.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use encoding::Encoding;

use crate::error::ProtocolError;

/// A supported wire text encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CodePage {
    /// UTF-8.
    #[default]
    Utf8,
    /// Windows-1251.
    Cp1251,
    /// KOI8-R.
    Koi8R,
    /// IBM866 (DOS Cyrillic).
    Cp866,
    /// Mac OS Cyrillic.
    MacCyrillic,
    /// ISO-8859-5.
    Iso8859_5,
}

impl CodePage {
    /// Every supported code page, in display order.
    pub const ALL: [CodePage; 6] = [
        CodePage::Utf8,
        CodePage::Cp1251,
        CodePage::Koi8R,
        CodePage::Cp866,
        CodePage::MacCyrillic,
        CodePage::Iso8859_5,
    ];

    /// The name users type to select this code page.
    pub fn name(self) -> &'static str {
        match self {
            CodePage::Utf8 => "utf-8",
            CodePage::Cp1251 => "cp1251",
            CodePage::Koi8R => "koi8_r",
            CodePage::Cp866 => "cp866",
            CodePage::MacCyrillic => "mac_cyrillic",
            CodePage::Iso8859_5 => "iso8859_5",
        }
    }

    /// Look up a code page by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        Self::ALL.into_iter().find(|cp| cp.name() == lower)
    }

    /// Space-separated list of every supported name.
    pub fn supported_names() -> String {
        Self::ALL.map(CodePage::name).join(" ")
    }

    /// The underlying `encoding_rs` encoding.
    pub fn encoding(self) -> &'static Encoding {
        match self {
            CodePage::Utf8 => encoding::UTF_8,
            CodePage::Cp1251 => encoding::WINDOWS_1251,
            CodePage::Koi8R => encoding::KOI8_R,
            CodePage::Cp866 => encoding::IBM866,
            CodePage::MacCyrillic => encoding::X_MAC_CYRILLIC,
            CodePage::Iso8859_5 => encoding::ISO_8859_5,
        }
    }

    /// Encode text for the wire. Unmappable characters become numeric
    /// character references.
    pub fn encode(self, text: &str) -> Cow<'_, [u8]> {
        let (bytes, _enc, _had_errors) = self.encoding().encode(text);
        bytes
    }

    /// Decode wire bytes. Malformed sequences become U+FFFD.
    pub fn decode(self, bytes: &[u8]) -> Cow<'_, str> {
        let (text, _had_errors) = self.encoding().decode_without_bom_handling(bytes);
        text
    }
}

impl fmt::Display for CodePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CodePage {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ProtocolError::UnknownCodePage(s.to_owned()))
    }
}
