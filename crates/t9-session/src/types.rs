/// A keypad press.
///
/// The keypad layout follows a phone: `2`..`9` type letters, `0` is the space
/// bar, `1` copies, `*` deletes and `#` cycles through candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// A letter key, `2..=9`.
    Digit(u8),
    /// `0`: commit the selected candidate after a space.
    Space,
    /// `1`: copy the committed text.
    Copy,
    /// `*`: delete the last pending digit, or the last committed character.
    Backspace,
    /// `#`: select the next candidate.
    NextCandidate,
}

impl KeyEvent {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Space),
            '1' => Some(Self::Copy),
            '2'..='9' => Some(Self::Digit(c as u8 - b'0')),
            '*' => Some(Self::Backspace),
            '#' => Some(Self::NextCandidate),
            _ => None,
        }
    }
}

/// The word currently offered for the pending digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedText {
    pub text: String,
}

/// Candidate panel action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateAction {
    /// Show or update the candidate panel with these words.
    Show { words: Vec<String>, selected: u32 },
    /// Hide the candidate panel.
    Hide,
}

/// Orthogonal side-effects that accompany a response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideEffects {
    /// Text the caller should place on the clipboard.
    pub copy_to_clipboard: Option<String>,
}

/// Response from `handle_key`, returned to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    pub consumed: bool,
    /// Committed text after the key was applied.
    pub text: String,
    /// Digits typed since the last commit.
    pub pending: String,
    pub marked: Option<MarkedText>,
    pub candidates: CandidateAction,
    pub side_effects: SideEffects,
}

pub(crate) fn cyclic_next(current: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (current + 1) % count
}
