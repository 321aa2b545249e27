//! Line tokenizing.
//!
//! Inbound lines follow one shape:
//! `[:prefix] COMMAND [middle params...] [:trailing text]`.
//! [`MessageRef`] splits a line along that shape without allocating for
//! the text itself.

mod borrowed;
mod parse;

pub use self::borrowed::MessageRef;

/// Parse a command token as a numeric reply code.
///
/// Numerics are exactly three ASCII digits; `"001"` is `Some(1)`.
pub fn numeric_code(command: &str) -> Option<u16> {
    if command.len() == 3 && command.bytes().all(|b| b.is_ascii_digit()) {
        command.parse().ok()
    } else {
        None
    }
}
