//! Digit-sequence index over a popular word list and a general dictionary.
//!
//! `T9Index` maps every digit sequence that a word encodes to (and every
//! registered prefix of one) to an [`IndexEntry`]. The index is built once by
//! [`IndexBuilder`] and never mutated afterwards, so it can be shared across
//! threads behind an `Arc` and queried without locking.

mod builder;
mod entry;

use std::collections::HashMap;

pub use builder::{build_index, IndexBuilder};
pub use entry::{IndexEntry, Tier, TierEntry};

#[derive(Debug, Default)]
pub struct T9Index {
    entries: HashMap<String, IndexEntry>,
}

/// Summary counts over the whole index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexStats {
    pub entries: usize,
    pub popular_words: usize,
    pub general_words: usize,
}

impl T9Index {
    pub fn get(&self, digits: &str) -> Option<&IndexEntry> {
        self.entries.get(digits)
    }

    pub fn contains(&self, digits: &str) -> bool {
        self.entries.contains_key(digits)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all `(digits, entry)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn stats(&self) -> IndexStats {
        self.entries
            .values()
            .fold(IndexStats::default(), |mut acc, e| {
                acc.entries += 1;
                acc.popular_words += e.popular.words.len();
                acc.general_words += e.general.words.len();
                acc
            })
    }
}
