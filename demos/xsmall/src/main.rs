//! xsmall — smallest runnable scenario for the spot grid engine.
//!
//! Builds one grid (an indigenous person with a preset trajectory and two
//! aliens on a 5×5 board), prints the starting layout, replays every move and
//! writes the replay to `output/xsmall/`.
//!
//! Pass a path to a JSON `Level` to run a different scenario:
//!
//! ```text
//! cargo run -p xsmall -- level.json
//! RUST_LOG=spot_grid=trace cargo run -p xsmall
//! ```

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use spot_core::{EngineConfig, GridRng, Level, MoveDirection, Step};
use spot_grid::{Grid, GridBuilder};
use spot_output::{CsvWriter, OutputWriter, ReplayOutputObserver, write_grid_json};
use spot_turn::{TurnObserver, run_to_completion};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:       u64  = 42;
const OUTPUT_DIR: &str = "output/xsmall";

// ── Level ─────────────────────────────────────────────────────────────────────

fn default_level() -> Level {
    Level::new(5, 3, 2)
        .with_name("Winnie")
        .with_indigenous_moves(vec![
            MoveDirection::Right,
            MoveDirection::Down,
            MoveDirection::Right,
        ])
}

fn load_level(path: &Path) -> Result<Level> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading level file {}", path.display()))?;
    let level = serde_json::from_str(&text)
        .with_context(|| format!("parsing level file {}", path.display()))?;
    Ok(level)
}

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         ReplayOutputObserver<W>,
    snapshot_rows: usize,
    turns:         usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: ReplayOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, turns: 0 }
    }
}

impl<W: OutputWriter> TurnObserver for CountingObserver<W> {
    fn on_turn_end(&mut self, step: Step, moved: bool) {
        if moved {
            self.turns += 1;
        }
        self.inner.on_turn_end(step, moved);
    }

    fn on_snapshot(&mut self, step: Step, grid: &Grid) {
        self.snapshot_rows += grid.person_count();
        info!(%step, indigenous = %grid.indigenous.position, "snapshot");
        self.inner.on_snapshot(step, grid);
    }

    fn on_replay_end(&mut self, final_step: Step) {
        self.inner.on_replay_end(final_step);
    }
}

fn print_people(grid: &Grid) {
    println!("{:<10} {:<11} {:<10} {:<24} {}", "Person", "Kind", "Position", "Color", "Moves");
    println!("{}", "-".repeat(72));
    for p in grid.people() {
        let moves: Vec<String> = p.trajectory.iter().map(|m| m.to_string()).collect();
        println!(
            "{:<10} {:<11} {:<10} {:<24} {}",
            p.id.0,
            p.kind.to_string(),
            p.position.to_string(),
            p.color,
            moves.join(" "),
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1. Level: from the command line, or the built-in one.
    let level = match std::env::args().nth(1) {
        Some(path) => load_level(Path::new(&path))?,
        None => default_level(),
    };
    println!("=== xsmall — spot grid engine ===");
    println!(
        "Grid: {0}×{0}  |  Moves: {1}  |  Aliens: {2}  |  Seed: {SEED}",
        level.size, level.moves, level.num_aliens
    );
    println!();

    // 2. Build.
    let config = EngineConfig { seed: SEED, ..Default::default() };
    let mut rng = GridRng::new(config.seed);
    let t0 = Instant::now();
    let mut grid = GridBuilder::new(level)
        .config(config)
        .build(&mut rng)
        .context("building grid")?;
    info!(elapsed_us = t0.elapsed().as_micros() as u64, "build finished");
    print_people(&grid);
    println!();

    // 3. Set up output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    write_grid_json(&Path::new(OUTPUT_DIR).join("grid.json"), &grid)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(ReplayOutputObserver::new(writer));

    // 4. Replay.
    let last = run_to_completion(&mut grid, &mut obs)?;
    if let Some(e) = obs.inner.take_error() {
        warn!("output error: {e}");
    }

    // 5. Summary.
    println!("Replay complete at {last} after {} turns", obs.turns);
    println!("  grid.json            : starting layout");
    println!("  person_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  turn_summaries.csv   : {} rows", obs.turns + 1);
    println!();
    print_people(&grid);

    Ok(())
}
