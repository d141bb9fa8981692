//! JSON export of a built grid, for handing to a front end.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use spot_grid::Grid;

use crate::OutputResult;

/// Serialize `grid` to a pretty-printed JSON string.
pub fn grid_to_json(grid: &Grid) -> OutputResult<String> {
    Ok(serde_json::to_string_pretty(grid)?)
}

/// Write `grid` as pretty-printed JSON to `path`, replacing any existing file.
pub fn write_grid_json(path: &Path, grid: &Grid) -> OutputResult<()> {
    let file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(file, grid)?;
    Ok(())
}
