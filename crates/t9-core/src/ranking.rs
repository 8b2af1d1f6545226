//! Candidate ranking over a [`T9Index`].
//!
//! Candidates come out in fixed tier order: popular exact matches, popular
//! prefix completions, general exact matches, general prefix completions, and
//! finally the typed digits themselves. Within a tier the order is whatever the
//! index stored; no secondary sort is applied.

use std::fmt;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::index::{T9Index, Tier, TierEntry};
use crate::settings::settings;

/// Which tier a candidate was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TierLabel {
    #[serde(rename = "popular-words")]
    PopularWords,
    #[serde(rename = "popular-prefix")]
    PopularPrefix,
    #[serde(rename = "dict-words")]
    DictWords,
    #[serde(rename = "dict-prefix")]
    DictPrefix,
    #[serde(rename = "numeric")]
    Numeric,
}

impl TierLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PopularWords => "popular-words",
            Self::PopularPrefix => "popular-prefix",
            Self::DictWords => "dict-words",
            Self::DictPrefix => "dict-prefix",
            Self::Numeric => "numeric",
        }
    }
}

impl fmt::Display for TierLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ranked word, borrowed from the index (or from the query for the numeric fallback).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Candidate<'a> {
    pub word: &'a str,
    pub label: TierLabel,
}

/// Words of every prefix child of `source` at least `min_len` digits long,
/// child by child in registration order.
fn completions<'a>(
    index: &'a T9Index,
    source: &'a TierEntry,
    tier: Tier,
    min_len: usize,
) -> impl Iterator<Item = &'a str> + 'a {
    source
        .prefix_children()
        .iter()
        .filter(move |child| child.len() >= min_len)
        .filter_map(move |child| index.get(child))
        .flat_map(move |entry| entry.tier(tier).words().iter().map(String::as_str))
}

/// Rank candidates for the digits typed so far.
///
/// `digits` must contain only `0`..`9`; other characters are not rejected and
/// simply fail to match anything. Every non-empty query ends with the digits
/// themselves labelled [`TierLabel::Numeric`].
pub fn rank<'a>(index: &'a T9Index, digits: &'a str) -> Vec<Candidate<'a>> {
    let _span = debug_span!("rank", digits).entered();
    if digits.is_empty() {
        return Vec::new();
    }
    let numeric = Candidate {
        word: digits,
        label: TierLabel::Numeric,
    };
    let Some(entry) = index.get(digits) else {
        debug!("no entry, numeric only");
        return vec![numeric];
    };

    let min_dict_prefix_len = settings().ranking.min_dict_prefix_len;
    let tagged = |label: TierLabel| move |word: &'a str| Candidate { word, label };

    let mut candidates: Vec<Candidate<'a>> = entry
        .popular
        .words()
        .iter()
        .map(String::as_str)
        .map(tagged(TierLabel::PopularWords))
        .collect();
    candidates.extend(
        completions(index, &entry.popular, Tier::Popular, 0).map(tagged(TierLabel::PopularPrefix)),
    );
    candidates.extend(
        entry
            .general
            .words()
            .iter()
            .map(String::as_str)
            .map(tagged(TierLabel::DictWords)),
    );
    candidates.extend(
        completions(index, &entry.general, Tier::General, min_dict_prefix_len)
            .map(tagged(TierLabel::DictPrefix)),
    );
    candidates.push(numeric);

    debug!(candidate_count = candidates.len());
    candidates
}

/// The word column of [`rank`], same order.
pub fn words<'a>(index: &'a T9Index, digits: &'a str) -> Vec<&'a str> {
    rank(index, digits).into_iter().map(|c| c.word).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;
    use crate::index::build_index;
    use crate::testutil::sample_index;

    fn labels(ranked: &[Candidate<'_>]) -> Vec<TierLabel> {
        ranked.iter().map(|c| c.label).collect()
    }

    #[test]
    fn test_empty_digits() {
        let index = sample_index();
        assert!(rank(&index, "").is_empty());
        assert!(words(&index, "").is_empty());
    }

    #[test]
    fn test_unknown_sequence_is_numeric_only() {
        let index = sample_index();
        let ranked = rank(&index, "666666666666");
        assert_eq!(
            ranked,
            vec![Candidate {
                word: "666666666666",
                label: TierLabel::Numeric
            }]
        );
    }

    #[test]
    fn test_empty_index() {
        let index = build_index(Vec::<String>::new(), Vec::<String>::new());
        assert_eq!(words(&index, "43556"), vec!["43556"]);
    }

    #[test]
    fn test_463_leading_candidates() {
        let index = sample_index();
        let ws = words(&index, "463");
        assert_eq!(
            &ws[..10],
            &[
                "god",
                "inf",
                "ind",
                "imf",
                "gnd",
                "information",
                "index",
                "industry",
                "individual",
                "india",
            ]
        );
        assert_eq!(ws.last(), Some(&"463"));
        // "info" encodes to 4636, one digit longer: not offered as a completion.
        assert!(!ws.contains(&"info"));
    }

    #[test]
    fn test_4636_leading_candidates() {
        let index = sample_index();
        let ranked = rank(&index, "4636");
        let ws: Vec<&str> = ranked.iter().map(|c| c.word).collect();
        assert_eq!(
            &ws[..10],
            &[
                "info",
                "indo",
                "information",
                "informed",
                "indonesia",
                "indoor",
                "inform",
                "informational",
                "informal",
                "informative",
            ]
        );
        assert_eq!(ranked[0].label, TierLabel::PopularWords);
        assert_eq!(ranked[2].label, TierLabel::PopularPrefix);
    }

    #[test]
    fn test_6666_all_tiers_no_repeats() {
        let index = sample_index();
        let ranked = rank(&index, "6666");
        let ws: Vec<&str> = ranked.iter().map(|c| c.word).collect();
        assert_eq!(
            ws,
            vec![
                "moon",
                "noon",
                "mono",
                "monopoly",
                "monogram",
                "moonlight",
                "monoclonal",
                "monophonic",
                "monmouth",
                "Monmouth's",
                "6666",
            ]
        );
        assert_eq!(
            labels(&ranked),
            vec![
                TierLabel::PopularWords,
                TierLabel::PopularWords,
                TierLabel::PopularWords,
                TierLabel::PopularPrefix,
                TierLabel::PopularPrefix,
                TierLabel::PopularPrefix,
                TierLabel::DictPrefix,
                TierLabel::DictPrefix,
                TierLabel::DictPrefix,
                TierLabel::DictPrefix,
                TierLabel::Numeric,
            ]
        );
        let unique: HashSet<&str> = ws.iter().copied().collect();
        assert_eq!(unique.len(), ws.len());
    }

    #[test]
    fn test_43556_general_completions() {
        let index = sample_index();
        assert_eq!(
            words(&index, "43556"),
            vec!["hello", "Hellman", "Hellman's", "43556"]
        );
    }

    #[test]
    fn test_general_exact_words() {
        let index = sample_index();
        let ranked = rank(&index, "462");
        assert_eq!(
            ranked[0],
            Candidate {
                word: "hob",
                label: TierLabel::DictWords
            }
        );
        // inches (462437) sits two digits below 462; inch (4624) is the immediate child.
        assert!(ranked.contains(&Candidate {
            word: "inches",
            label: TierLabel::DictPrefix
        }));
        assert!(!ranked.iter().any(|c| c.word == "inch"));
    }

    #[test]
    fn test_general_prefix_minimum_length() {
        let index = sample_index();
        let root = index.get("").unwrap();
        // "go" (46) is registered under the empty prefix but is too short to complete.
        assert!(root.general.prefix_children().iter().any(|c| c == "46"));
        let general: Vec<&str> = completions(&index, &root.general, Tier::General, 3).collect();
        assert!(!general.contains(&"go"));
        assert!(general.contains(&"going"));
        // The popular tier has no minimum.
        let popular: Vec<&str> = completions(&index, &root.popular, Tier::Popular, 0).collect();
        assert!(popular.contains(&"of"));
    }

    #[test]
    fn test_label_strings() {
        assert_eq!(TierLabel::PopularWords.to_string(), "popular-words");
        assert_eq!(TierLabel::PopularPrefix.to_string(), "popular-prefix");
        assert_eq!(TierLabel::DictWords.to_string(), "dict-words");
        assert_eq!(TierLabel::DictPrefix.to_string(), "dict-prefix");
        assert_eq!(TierLabel::Numeric.to_string(), "numeric");
    }

    #[test]
    fn test_concurrent_queries() {
        let index = std::sync::Arc::new(sample_index());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let index = std::sync::Arc::clone(&index);
                std::thread::spawn(move || {
                    words(&index, "6666")
                        .into_iter()
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        let expected = words(&index, "6666");
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    }

    proptest! {
        #[test]
        fn prop_numeric_fallback_last(digits in "[0-9]{1,12}") {
            let index = sample_index();
            let ranked = rank(&index, &digits);
            let last = ranked.last().unwrap();
            prop_assert_eq!(last.word, digits.as_str());
            prop_assert_eq!(last.label, TierLabel::Numeric);
            prop_assert_eq!(
                ranked.iter().filter(|c| c.label == TierLabel::Numeric).count(),
                1
            );
        }

        #[test]
        fn prop_no_repeated_words(digits in "[2-9]{1,6}") {
            let index = sample_index();
            let ranked = rank(&index, &digits);
            let mut seen = HashSet::new();
            for c in ranked.iter().filter(|c| c.label != TierLabel::Numeric) {
                prop_assert!(seen.insert(c.word), "{} repeated for {}", c.word, digits);
            }
        }

        #[test]
        fn prop_deterministic(digits in "[2-9]{1,6}") {
            let index = sample_index();
            prop_assert_eq!(rank(&index, &digits), rank(&index, &digits));
        }
    }
}
