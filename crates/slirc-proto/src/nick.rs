//! Nickname validation.
//!
//! A nickname starts with a Latin or Cyrillic letter and continues with one
//! or more word characters (letters, digits, underscore).

/// Extension trait for checking if a string is a valid nickname.
pub trait NickExt {
    /// Check if this string is a valid nickname.
    ///
    /// # Examples
    ///
    /// ```
    /// use slirc_proto::NickExt;
    ///
    /// assert!("nick".is_valid_nick());
    /// assert!("new_nickname1".is_valid_nick());
    /// assert!("Вася".is_valid_nick());
    ///
    /// assert!(!"123nick".is_valid_nick());  // Can't start with digit
    /// assert!(!"!@^&$%".is_valid_nick());   // Symbols
    /// assert!(!"n".is_valid_nick());        // Too short
    /// ```
    fn is_valid_nick(&self) -> bool;

    /// Check validity with a custom maximum length in characters.
    fn is_valid_nick_len(&self, max_len: usize) -> bool;
}

/// Default maximum nickname length.
pub const DEFAULT_NICK_MAX_LEN: usize = 30;

#[inline]
fn is_cyrillic_letter(c: char) -> bool {
    matches!(c, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё')
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl NickExt for &str {
    fn is_valid_nick(&self) -> bool {
        self.is_valid_nick_len(DEFAULT_NICK_MAX_LEN)
    }

    fn is_valid_nick_len(&self, max_len: usize) -> bool {
        if self.chars().count() > max_len {
            return false;
        }

        let mut chars = self.chars();
        let first = match chars.next() {
            Some(c) => c,
            None => return false,
        };

        if !first.is_ascii_alphabetic() && !is_cyrillic_letter(first) {
            return false;
        }

        let rest = chars.as_str();
        !rest.is_empty() && rest.chars().all(is_word_char)
    }
}

impl NickExt for String {
    fn is_valid_nick(&self) -> bool {
        self.as_str().is_valid_nick()
    }

    fn is_valid_nick_len(&self, max_len: usize) -> bool {
        self.as_str().is_valid_nick_len(max_len)
    }
}
