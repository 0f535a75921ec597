extern crate rustem;

use std::fs;
use std::path::PathBuf;

use rustem::stem;

fn fixture(name: &str) -> String {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "data", name]
        .iter()
        .collect();
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {:?}: {}", path, e))
}

fn vocabulary() -> Vec<(String, String)> {
    let voc = fixture("voc.txt");
    let out = fixture("output.txt");
    let words: Vec<&str> = voc.lines().collect();
    let stems: Vec<&str> = out.lines().collect();
    assert_eq!(words.len(), stems.len(), "fixture files are misaligned");

    words
        .into_iter()
        .zip(stems)
        .map(|(w, s)| (w.to_string(), s.to_string()))
        .collect()
}

// Reference vocabulary pairing: every word must stem to its recorded stem,
// with zero mismatches.
#[test]
fn reference_vocabulary_has_no_mismatches() {
    let mut failures = Vec::new();
    for (word, expected) in vocabulary() {
        match stem(&word) {
            Some(actual) => {
                if actual != expected {
                    failures.push(format!("{} => {} (expected {})", word, actual, expected));
                }
            }
            None => failures.push(format!("{} => rejected (expected {})", word, expected)),
        }
    }

    if !failures.is_empty() {
        panic!(
            "{} mismatches:\n{}",
            failures.len(),
            failures.join("\n")
        );
    }
}

// Stemming is not idempotent, but re-stemming a stem must never grow it and
// must never wander off it: the re-stem is always a prefix of the stem.
#[test]
fn restemming_never_grows_or_diverges() {
    for (word, expected) in vocabulary() {
        let restemmed = stem(&expected)
            .unwrap_or_else(|| panic!("stem of {} rejected its own output", word));
        assert!(
            expected.starts_with(&restemmed),
            "restem of {} gave {}, not a prefix of {}",
            word,
            restemmed,
            expected
        );
    }
}
