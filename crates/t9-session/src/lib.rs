//! Keypad session: turns key presses into committed text using a shared index.
//!
//! `KeypadSession` owns the committed text, the digits typed since the last
//! commit and the candidate selection. It never renders anything; each key
//! returns a [`KeyResponse`] that a frontend turns into screen updates.

mod key_handlers;
mod types;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use t9_core::settings::settings;
use t9_core::{words, T9Index};

pub use types::{CandidateAction, KeyEvent, KeyResponse, MarkedText, SideEffects};

pub struct KeypadSession {
    index: Arc<T9Index>,
    text: String,
    pending: String,
    selected: usize,
    max_pending_digits: usize,
}

impl KeypadSession {
    pub fn new(index: Arc<T9Index>) -> Self {
        Self {
            index,
            text: String::new(),
            pending: String::new(),
            selected: 0,
            max_pending_digits: settings().session.max_pending_digits,
        }
    }

    pub fn set_max_pending_digits(&mut self, max: usize) {
        self.max_pending_digits = max;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Digits typed since the last commit.
    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_composing(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Ranked words for the pending digits, numeric fallback last.
    pub fn candidates(&self) -> Vec<&str> {
        words(&self.index, &self.pending)
    }

    /// The selected candidate, or `""` when nothing is pending.
    pub fn selected_word(&self) -> &str {
        self.candidates()
            .get(self.selected)
            .copied()
            .unwrap_or("")
    }

    /// Drop the pending digits and the selection, keeping the committed text.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.selected = 0;
    }
}
