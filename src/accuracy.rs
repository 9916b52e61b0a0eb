//! Batch accuracy evaluation.
//!
//! Grounded on `tests/accuracy/test_stemmer_accuracy.py`: read
//! `(inflection, stem)` pairs, compare each against `Stemmer::stem`'s
//! attempt, and report accuracy plus the average over/under-stemming gap.
//! A library call only — no file writing, no tabular printing, matching
//! §1's non-goal of tabular reporting.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::config::Stemmer;
use crate::error::StemmerError;

#[derive(Debug, Deserialize)]
struct Example {
    inflection: String,
    stem: String,
}

/// One mismatch between an expected stem and the stemmer's attempt.
#[derive(Debug, Clone, Serialize)]
pub struct Miss {
    pub inflection: String,
    pub expected: String,
    pub attempt: String,
}

/// Summary statistics over a batch of `(inflection, expected_stem)` pairs.
#[derive(Debug, Clone, Serialize, Default)]
pub struct AccuracyReport {
    pub correct_attempts: usize,
    pub incorrect_attempts: usize,
    pub accuracy: f64,
    /// Average character-length gap when an attempt under-stems (comes out
    /// longer than expected).
    pub understemming_avg: f64,
    /// Average character-length gap when an attempt over-stems (comes out
    /// shorter than expected).
    pub overstemming_avg: f64,
    pub understemming_total: usize,
    pub overstemming_total: usize,
    #[serde(skip)]
    pub misses: Vec<Miss>,
}

/// Evaluate `stemmer` against every `(inflection, stem)` row read from
/// `csv_data` (a CSV document with an `inflection,stem` header).
pub fn evaluate(stemmer: &Stemmer, csv_data: impl Read) -> Result<AccuracyReport, StemmerError> {
    let mut reader = csv::Reader::from_reader(csv_data);
    let mut report = AccuracyReport::default();

    for result in reader.deserialize() {
        let example: Example = result.map_err(|source| StemmerError::Io {
            path: "<csv input>".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, source),
        })?;

        let attempt = stemmer.stem(&example.inflection).text;

        if attempt == example.stem {
            report.correct_attempts += 1;
        } else {
            report.incorrect_attempts += 1;
            let expected_len = example.stem.chars().count();
            let attempt_len = attempt.chars().count();
            if attempt_len > expected_len {
                report.understemming_total += attempt_len - expected_len;
            } else {
                report.overstemming_total += expected_len - attempt_len;
            }
            report.misses.push(Miss {
                inflection: example.inflection,
                expected: example.stem,
                attempt,
            });
        }
    }

    let total = report.correct_attempts + report.incorrect_attempts;
    if total > 0 {
        report.accuracy = (report.correct_attempts as f64 / total as f64 * 10000.0).round() / 10000.0;
        report.understemming_avg = (report.understemming_total as f64 / total as f64 * 100.0).round() / 100.0;
        report.overstemming_avg = (report.overstemming_total as f64 / total as f64 * 100.0).round() / 100.0;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_perfect_accuracy_on_matching_pairs() {
        let stemmer = Stemmer::default();
        let csv = "inflection,stem\npangailangan,kailangan\nparami,dami\n";
        let report = evaluate(&stemmer, csv.as_bytes()).unwrap();
        assert_eq!(report.correct_attempts, 2);
        assert_eq!(report.incorrect_attempts, 0);
        assert_eq!(report.accuracy, 1.0);
    }

    #[test]
    fn counts_overstemming_when_attempt_is_shorter() {
        let stemmer = Stemmer::default();
        // "bukas" won't be derived from plain "bukas" input with no affix to strip
        let csv = "inflection,stem\nbukas,bukasan\n";
        let report = evaluate(&stemmer, csv.as_bytes()).unwrap();
        assert_eq!(report.incorrect_attempts, 1);
        assert!(report.overstemming_total > 0);
    }
}
