//! `spot-output` — replay output writers for the spot grid engine.
//!
//! | Backend  | Files created                                        |
//! |----------|------------------------------------------------------|
//! | CSV      | `person_snapshots.csv`, `turn_summaries.csv`         |
//! | JSON     | one file per exported grid ([`write_grid_json`])     |
//!
//! Row backends implement [`OutputWriter`] and are driven by
//! [`ReplayOutputObserver`], which implements `spot_turn::TurnObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use spot_output::{CsvWriter, ReplayOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = ReplayOutputObserver::new(writer);
//! run_to_completion(&mut grid, &mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod observer;
pub mod row;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use json::{grid_to_json, write_grid_json};
pub use observer::ReplayOutputObserver;
pub use row::{PersonSnapshotRow, TurnSummaryRow};
pub use writer::OutputWriter;
