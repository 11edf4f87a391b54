// Alphabet mapping and case folding.
//
// Binary dictionaries encode letters as 5-bit ordinals: 1 for 'a' through
// 26 for 'z'. Ordinal 0 is reserved and never denotes a letter.

/// Number of encodable letters.
pub const ALPHABET_LEN: u8 = 26;

/// Map a character to its letter ordinal in `1..=26`.
///
/// Uppercase ASCII letters are folded to lowercase first. Anything outside
/// `a..=z` after folding (digits, punctuation, whitespace, non-ASCII) has
/// no ordinal and returns `None`.
#[inline]
pub fn letter_to_ord(c: char) -> Option<u8> {
    match fold_lower(c) {
        c @ 'a'..='z' => Some(c as u8 - b'a' + 1),
        _ => None,
    }
}

/// Map a letter ordinal back to its lowercase character.
///
/// Returns `None` for the reserved ordinal 0 and for anything above 26.
#[inline]
pub fn ord_to_letter(ord: u8) -> Option<char> {
    match ord {
        1..=ALPHABET_LEN => Some((b'a' + ord - 1) as char),
        _ => None,
    }
}

/// ASCII lowercase fold. Non-ASCII characters pass through unchanged.
#[inline]
pub fn fold_lower(c: char) -> char {
    c.to_ascii_lowercase()
}

/// Whether every character of `s` folds to an encodable letter.
///
/// The empty string vacuously qualifies.
pub fn is_word_chars(s: &str) -> bool {
    s.chars().all(|c| letter_to_ord(c).is_some())
}
