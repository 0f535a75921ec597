//! Line-oriented batch stemming over word files.
//!
//! Input files carry one word per line. Lines the input gate rejects
//! (blank, non-Cyrillic) are skipped rather than reported as errors, so a
//! raw frequency list can be fed through unfiltered.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::models::StemRecord;
use crate::stemmer::stem;

#[derive(Fail, Debug)]
pub enum BatchError {
    #[fail(display = "io error: {}", _0)]
    Io(#[cause] std::io::Error),
    #[fail(display = "json error: {}", _0)]
    Json(#[cause] serde_json::Error),
}

impl From<std::io::Error> for BatchError {
    fn from(e: std::io::Error) -> BatchError {
        BatchError::Io(e)
    }
}

impl From<serde_json::Error> for BatchError {
    fn from(e: serde_json::Error) -> BatchError {
        BatchError::Json(e)
    }
}

/// Stem every line of a word-per-line file.
pub fn stem_file<P: AsRef<Path>>(path: P) -> Result<Vec<StemRecord>, BatchError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(stem) = stem(&line) {
            records.push(StemRecord {
                word: line.trim().to_string(),
                stem,
            });
        }
    }
    Ok(records)
}

/// Write stems as plain text, one per line, aligned with the input order.
pub fn write_stems<P: AsRef<Path>>(records: &[StemRecord], path: P) -> Result<(), BatchError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for record in records {
        writeln!(writer, "{}", record.stem)?;
    }
    Ok(())
}

/// Write the records as a JSON array of {word, stem} objects.
pub fn write_json<P: AsRef<Path>>(records: &[StemRecord], path: P) -> Result<(), BatchError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}
