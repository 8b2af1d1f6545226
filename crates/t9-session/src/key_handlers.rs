use tracing::{debug, debug_span};

use super::types::{cyclic_next, CandidateAction, KeyEvent, KeyResponse, MarkedText, SideEffects};
use super::KeypadSession;

impl KeypadSession {
    /// Process a key event. Returns a KeyResponse describing what the caller should show.
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyResponse {
        let _span = debug_span!("handle_key", ?event).entered();

        match event {
            KeyEvent::Digit(d) if (2..=9).contains(&d) => {
                if self.pending.len() >= self.max_pending_digits {
                    debug!(pending = self.pending.len(), "pending digits full");
                    return self.response(false, SideEffects::default());
                }
                self.pending.push((b'0' + d) as char);
                self.selected = 0;
                self.response(true, SideEffects::default())
            }
            KeyEvent::Digit(_) => self.response(false, SideEffects::default()),

            KeyEvent::Space => {
                let word = self.selected_word().to_string();
                self.text.push(' ');
                self.text.push_str(&word);
                debug!(word = word.as_str(), "commit");
                self.reset();
                self.response(true, SideEffects::default())
            }

            KeyEvent::Copy => {
                let effects = SideEffects {
                    copy_to_clipboard: Some(self.text.clone()),
                };
                self.response(true, effects)
            }

            KeyEvent::Backspace => {
                if self.pending.pop().is_some() {
                    self.selected = 0;
                } else {
                    self.text.pop();
                }
                self.response(true, SideEffects::default())
            }

            KeyEvent::NextCandidate => {
                let count = self.candidates().len();
                self.selected = cyclic_next(self.selected, count);
                self.response(true, SideEffects::default())
            }
        }
    }

    /// Feed every keypad character of `keys`, ignoring anything else.
    /// Returns the response to the last recognised key, if any.
    pub fn type_keys(&mut self, keys: &str) -> Option<KeyResponse> {
        keys.chars()
            .filter_map(KeyEvent::from_char)
            .map(|event| self.handle_key(event))
            .last()
    }

    fn response(&self, consumed: bool, side_effects: SideEffects) -> KeyResponse {
        let candidates = self.candidates();
        let (marked, action) = if candidates.is_empty() {
            (None, CandidateAction::Hide)
        } else {
            let marked = candidates.get(self.selected).map(|w| MarkedText {
                text: w.to_string(),
            });
            let action = CandidateAction::Show {
                words: candidates.iter().map(|w| w.to_string()).collect(),
                selected: self.selected as u32,
            };
            (marked, action)
        };
        KeyResponse {
            consumed,
            text: self.text.clone(),
            pending: self.pending.clone(),
            marked,
            candidates: action,
            side_effects,
        }
    }
}
