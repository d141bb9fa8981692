//! The `OutputWriter` trait implemented by row backends.

use crate::{OutputResult, PersonSnapshotRow, TurnSummaryRow};

/// Trait implemented by row-oriented writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`ReplayOutputObserver::take_error`][crate::ReplayOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of person snapshots.
    fn write_snapshots(&mut self, rows: &[PersonSnapshotRow]) -> OutputResult<()>;

    /// Write one turn summary row.
    fn write_turn_summary(&mut self, row: &TurnSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
