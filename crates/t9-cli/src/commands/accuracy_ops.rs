//! Leading-candidate checks against a TOML corpus.
//!
//! ```toml
//! [[cases]]
//! digits = "463"
//! expected = ["god", "inf", "ind"]
//! note = "popular words before completions"
//! ```

use std::fs;
use std::process;

use serde::{Deserialize, Serialize};

use t9_core::{words, T9Index};

#[derive(Debug, Deserialize)]
pub struct AccuracyCorpus {
    pub cases: Vec<AccuracyCase>,
}

#[derive(Debug, Deserialize)]
pub struct AccuracyCase {
    pub digits: String,
    pub expected: Vec<String>,
    #[serde(default)]
    pub skip: bool,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyStatus {
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Serialize)]
pub struct AccuracyResult {
    pub digits: String,
    pub expected: Vec<String>,
    pub actual: Vec<String>,
    pub status: AccuracyStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AccuracySummary {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    pub skip: usize,
}

#[derive(Debug, Serialize)]
pub struct AccuracyReport {
    pub results: Vec<AccuracyResult>,
    pub summary: AccuracySummary,
}

pub fn parse_corpus(content: &str) -> Result<AccuracyCorpus, toml::de::Error> {
    toml::from_str(content)
}

/// Compare the leading candidates of every case with its expectation.
pub fn evaluate(index: &T9Index, corpus: &AccuracyCorpus) -> AccuracyReport {
    let results: Vec<AccuracyResult> = corpus
        .cases
        .iter()
        .map(|case| {
            let actual: Vec<String> = words(index, &case.digits)
                .into_iter()
                .take(case.expected.len())
                .map(str::to_string)
                .collect();
            let status = if case.skip {
                AccuracyStatus::Skip
            } else if actual == case.expected {
                AccuracyStatus::Pass
            } else {
                AccuracyStatus::Fail
            };
            AccuracyResult {
                digits: case.digits.clone(),
                expected: case.expected.clone(),
                actual,
                status,
                note: case.note.clone(),
            }
        })
        .collect();

    let count = |s: AccuracyStatus| results.iter().filter(|r| r.status == s).count();
    let summary = AccuracySummary {
        total: results.len(),
        pass: count(AccuracyStatus::Pass),
        fail: count(AccuracyStatus::Fail),
        skip: count(AccuracyStatus::Skip),
    };
    AccuracyReport { results, summary }
}

pub fn accuracy_cmd(index: &T9Index, corpus_file: &str, verbose: bool, json: bool) {
    let content = die!(
        fs::read_to_string(corpus_file),
        "Error reading corpus file: {}"
    );
    let corpus = die!(parse_corpus(&content), "Error parsing corpus TOML: {}");
    let report = evaluate(index, &corpus);

    if json {
        println!(
            "{}",
            die!(
                serde_json::to_string_pretty(&report),
                "Error serializing: {}"
            )
        );
    } else {
        for r in &report.results {
            if r.status == AccuracyStatus::Pass && !verbose {
                continue;
            }
            let tag = match r.status {
                AccuracyStatus::Pass => "PASS",
                AccuracyStatus::Fail => "FAIL",
                AccuracyStatus::Skip => "SKIP",
            };
            println!(
                "  {tag}: {} expected [{}] got [{}]",
                r.digits,
                r.expected.join(", "),
                r.actual.join(", ")
            );
        }
        let s = &report.summary;
        println!();
        println!("=== Summary ===");
        println!("  Total: {}", s.total);
        println!("  Pass:  {}", s.pass);
        println!("  Fail:  {}", s.fail);
        println!("  Skip:  {}", s.skip);
    }

    if report.summary.fail > 0 {
        process::exit(1);
    }
}
