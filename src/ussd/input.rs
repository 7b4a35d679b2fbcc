//! Keypad input rules.
//!
//! A submission is a single ASCII character; the only normalisation applied
//! is trimming surrounding whitespace.

/// Key that means "back" on every screen except the welcome menu.
pub const BACK_KEY: &str = "0";

/// Maximum number of characters the pending input buffer holds.
pub const MAX_PENDING_INPUT: usize = 1;

/// Strip surrounding whitespace from a raw submission.
pub fn normalize_key(raw: &str) -> &str {
    raw.trim()
}

/// Whether `ch` belongs to the keypad alphabet.
pub fn is_keypad_char(ch: char) -> bool {
    ch.is_ascii_graphic()
}

/// Whether `key` is usable as a menu option key.
pub fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    matches!((chars.next(), chars.next()), (Some(ch), None) if is_keypad_char(ch))
}
