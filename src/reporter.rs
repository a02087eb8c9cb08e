// src/reporter.rs
// Flat-file persistence: one appended block per successful query.

use std::fs::OpenOptions;
use std::io::Write;

use crate::error::ResearchError;
use crate::record::ResearchRecord;

pub struct Reporter;

impl Reporter {
    /// Appends the record's text rendering under a timestamped header.
    /// Creates the file on first use.
    pub fn append_record(path: &str, record: &ResearchRecord) -> Result<(), ResearchError> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        write!(
            file,
            "--- Research Output ---\nTimestamp: {}\n\n{}\n",
            timestamp, record
        )?;
        Ok(())
    }
}
