//! `ReplayOutputObserver<W>` — bridges `TurnObserver` to an `OutputWriter`.

use spot_core::Step;
use spot_grid::Grid;
use spot_turn::TurnObserver;

use crate::row::{PersonSnapshotRow, TurnSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`TurnObserver`] that writes person snapshots and turn summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `TurnObserver`
/// methods have no return value.  After the replay returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct ReplayOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> ReplayOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the replay returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the replay).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> TurnObserver for ReplayOutputObserver<W> {
    fn on_turn_end(&mut self, step: Step, moved: bool) {
        let row = TurnSummaryRow { step: step.0, moved };
        let result = self.writer.write_turn_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, step: Step, grid: &Grid) {
        let rows: Vec<PersonSnapshotRow> = grid
            .people()
            .map(|p| PersonSnapshotRow {
                person_id:       p.id.0,
                kind:            p.kind,
                step:            step.0,
                x:               p.position.x,
                y:               p.position.y,
                remaining_moves: p.trajectory.len() as u32,
            })
            .collect();

        let result = self.writer.write_snapshots(&rows);
        self.store_err(result);
    }

    fn on_replay_end(&mut self, _final_step: Step) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
