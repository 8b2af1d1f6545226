//! Letter/digit table of a standard phone keypad.
//!
//! Digits `2`..`9` each carry a run of three or four Latin letters; `0` and `1`
//! carry none. The inverse table is computed at compile time.

/// Letters printed on each key, indexed by digit.
pub const LETTERS: [&str; 10] = [
    "", "", "abc", "def", "ghi", "jkl", "mno", "pqrs", "tuv", "wxyz",
];

/// Digit for each letter `a..=z`.
const BY_LETTER: [u8; 26] = invert(&LETTERS);

const fn invert(letters: &[&str; 10]) -> [u8; 26] {
    let mut table = [0u8; 26];
    let mut digit = 0;
    while digit < letters.len() {
        let bytes = letters[digit].as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            table[(bytes[i] - b'a') as usize] = b'0' + digit as u8;
            i += 1;
        }
        digit += 1;
    }
    table
}

/// Digit character for a letter, case-insensitive. `None` for anything outside `a..=z`.
pub fn digit_for(c: char) -> Option<char> {
    let lower = c.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Some(BY_LETTER[(lower as u8 - b'a') as usize] as char)
    } else {
        None
    }
}

/// Letters carried by a digit character; empty for `0`, `1` and non-digits.
pub fn letters_for(digit: char) -> &'static str {
    digit
        .to_digit(10)
        .map(|d| LETTERS[d as usize])
        .unwrap_or("")
}

/// Encode a word into its digit sequence. `"Hello!"` => `"43556"`.
///
/// The word is lower-cased first, so non-ASCII letters whose lower-case form
/// falls outside `a..=z` are dropped along with punctuation and digits.
pub fn encode(word: &str) -> String {
    word.chars()
        .flat_map(char::to_lowercase)
        .filter_map(digit_for)
        .collect()
}
