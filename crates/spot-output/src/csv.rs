//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `person_snapshots.csv`
//! - `turn_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, PersonSnapshotRow, TurnSummaryRow};

/// Writes replay output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("person_snapshots.csv"))?;
        snapshots.write_record(["person_id", "kind", "step", "x", "y", "remaining_moves"])?;

        let mut summaries = Writer::from_path(dir.join("turn_summaries.csv"))?;
        summaries.write_record(["step", "moved"])?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[PersonSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.person_id.to_string(),
                row.kind.to_string(),
                row.step.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.remaining_moves.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_turn_summary(&mut self, row: &TurnSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.step.to_string(),
            (row.moved as u8).to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
