//! Digit encoding, index construction and candidate ranking for T9 keypad input.
//!
//! Words are encoded into digit sequences with [`keypad::encode`], collected into an
//! immutable [`index::T9Index`], and queried per keystroke through [`ranking::rank`].

pub mod background;
pub mod index;
pub mod keypad;
pub mod ranking;
pub mod settings;
#[cfg(test)]
mod testutil;

pub use index::{build_index, IndexBuilder, T9Index};
pub use ranking::{rank, words, Candidate, TierLabel};
