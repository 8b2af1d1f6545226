//! Shared word lists for unit tests.
//!
//! The popular list is rank-ordered the way a frequency list would be; the
//! general list mixes in duplicates, capitalised variants and words already
//! covered by the popular tier.

use crate::index::{build_index, T9Index};

pub(crate) const POPULAR: &[&str] = &[
    "the",
    "of",
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
    "info",
    "indo",
    "informed",
    "indonesia",
    "indoor",
    "inform",
    "informational",
    "informal",
    "informative",
    "hello",
    "moon",
    "noon",
    "mono",
    "monopoly",
    "monogram",
    "moonlight",
    "",
    "god",
];

pub(crate) const GENERAL: &[&str] = &[
    "a",
    "hello",
    "Hellman",
    "Hellman's",
    "moon",
    "Moon",
    "monoclonal",
    "monophonic",
    "monmouth",
    "Monmouth's",
    "hob",
    "inch",
    "inches",
    "",
    "--",
    "monoclonal",
    "going",
    "gone",
    "go",
];

pub(crate) fn sample_index() -> T9Index {
    build_index(POPULAR, GENERAL)
}
