use std::collections::{HashMap, HashSet};

use tracing::{debug, debug_span};

use super::{IndexEntry, T9Index, TierEntry};
use crate::keypad::encode;

/// Working state for one tier while words are being fed in.
#[derive(Default)]
struct TierMap {
    entries: HashMap<String, WorkingEntry>,
}

#[derive(Default)]
struct WorkingEntry {
    words: Vec<String>,
    children: Vec<String>,
    seen_children: HashSet<String>,
}

impl TierMap {
    fn has_words(&self, digits: &str) -> bool {
        self.entries
            .get(digits)
            .is_some_and(|e| !e.words.is_empty())
    }

    fn insert_word(&mut self, digits: &str, word: &str) {
        let entry = self.entries.entry(digits.to_string()).or_default();
        if !entry.words.iter().any(|w| w == word) {
            entry.words.push(word.to_string());
        }
    }

    /// Register `digits` as a prefix child of its prefixes of length `0..=len-2`.
    /// The immediate `len-1` parent is left out.
    fn register_prefixes(&mut self, digits: &str) {
        // Digit sequences are ASCII, so every byte offset is a char boundary.
        for len in 0..digits.len().saturating_sub(1) {
            let entry = self.entries.entry(digits[..len].to_string()).or_default();
            if entry.seen_children.insert(digits.to_string()) {
                entry.children.push(digits.to_string());
            }
        }
    }

    fn into_entries(self) -> impl Iterator<Item = (String, TierEntry)> {
        self.entries.into_iter().map(|(digits, e)| {
            (
                digits,
                TierEntry {
                    words: e.words,
                    prefix_children: e.children,
                },
            )
        })
    }
}

/// Incremental index construction.
///
/// The popular tier is fixed at construction time because it filters the
/// general tier: a digit sequence that already has a popular word never
/// collects general words.
#[derive(Default)]
pub struct IndexBuilder {
    popular: TierMap,
    general: TierMap,
    popular_count: usize,
    general_count: usize,
}

impl IndexBuilder {
    /// Start a builder from the popular list, earliest word first.
    pub fn from_popular<I, S>(popular: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Self::default();
        for word in popular {
            builder.add_popular(word.as_ref());
        }
        builder
    }

    fn add_popular(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let digits = encode(word);
        self.popular.insert_word(&digits, word);
        self.popular.register_prefixes(&digits);
        self.popular_count += 1;
    }

    /// Offer a general dictionary word. Returns `false` when the word was
    /// skipped (empty, no encodable letters, or its sequence has a popular word).
    pub fn add_general(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let digits = encode(word);
        if digits.is_empty() || self.popular.has_words(&digits) {
            return false;
        }
        self.general.insert_word(&digits, word);
        self.general.register_prefixes(&digits);
        self.general_count += 1;
        true
    }

    pub fn extend_general<I, S>(&mut self, general: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in general {
            self.add_general(word.as_ref());
        }
    }

    /// Merge both tiers into the final index.
    pub fn build(self) -> T9Index {
        let mut entries: HashMap<String, IndexEntry> =
            HashMap::with_capacity(self.popular.entries.len().max(self.general.entries.len()));
        for (digits, popular) in self.popular.into_entries() {
            entries.entry(digits).or_default().popular = popular;
        }
        for (digits, general) in self.general.into_entries() {
            entries.entry(digits).or_default().general = general;
        }
        debug!(
            entries = entries.len(),
            popular_words = self.popular_count,
            general_words = self.general_count,
            "index built"
        );
        T9Index { entries }
    }
}

/// Build an index from a rank-ordered popular list and a general dictionary.
pub fn build_index<P, G, S, T>(popular: P, general: G) -> T9Index
where
    P: IntoIterator<Item = S>,
    S: AsRef<str>,
    G: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let _span = debug_span!("build_index").entered();
    let mut builder = IndexBuilder::from_popular(popular);
    builder.extend_general(general);
    builder.build()
}
