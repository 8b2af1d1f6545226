use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use t9_core::background::IndexLoader;
use t9_core::keypad::encode;
use t9_core::settings::init_custom;
use t9_core::{rank, Candidate, T9Index};
use t9_session::KeypadSession;

use crate::word_source::read_word_list;

/// Install a custom settings file before anything reads the settings.
pub fn load_settings(path: &str) {
    let content = die!(fs::read_to_string(path), "Error reading settings: {}");
    die!(init_custom(content), "Error in settings: {}");
}

/// Read both word lists and build the index on the background worker.
pub fn load_index(popular_file: &str, dict_file: &str) -> Arc<T9Index> {
    let popular = die!(
        read_word_list(Path::new(popular_file)),
        "Error opening popular list: {}"
    );
    let general = die!(
        read_word_list(Path::new(dict_file)),
        "Error opening dictionary: {}"
    );
    let loader = die!(
        IndexLoader::spawn(popular, general),
        "Error building index: {}"
    );
    die!(loader.wait(), "Error building index: {}")
}

pub fn encode_cmd(words: &[String]) {
    for word in words {
        println!("{}\t{}", word, encode(word));
    }
}

#[derive(Serialize)]
struct RankOutput<'a> {
    digits: &'a str,
    candidates: Vec<Candidate<'a>>,
}

pub fn rank_cmd(index: &T9Index, digits: &[String], n: Option<usize>, json: bool) {
    for d in digits {
        let mut candidates = rank(index, d);
        if let Some(n) = n {
            candidates.truncate(n);
        }
        if json {
            let out = RankOutput {
                digits: d,
                candidates,
            };
            println!(
                "{}",
                die!(serde_json::to_string(&out), "Error serializing: {}")
            );
        } else {
            println!("{d}:");
            for (i, c) in candidates.iter().enumerate() {
                println!("  #{:>2}: {:<24} {}", i + 1, c.word, c.label);
            }
        }
    }
}

pub fn stats_cmd(index: &T9Index) {
    let stats = index.stats();
    println!("entries:       {}", stats.entries);
    println!("popular words: {}", stats.popular_words);
    println!("general words: {}", stats.general_words);
}

pub fn simulate_cmd(index: Arc<T9Index>, keys: &str) {
    let mut session = KeypadSession::new(index);
    session.type_keys(keys);
    println!("text:    {:?}", session.text());
    if session.is_composing() {
        println!("pending: {} -> {}", session.pending(), session.selected_word());
    }
}
