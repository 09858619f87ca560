//! chessboard: parking pressure on a synthetic 10×10 grid.
//!
//! Generates a commuter population, pushes one simulated day through the
//! event recorder, replays it to score every parking manoeuvre, and writes
//! the scores, the end-of-day occupancy, and the search-time density table
//! to `output/chessboard/`.  A few more days are then replayed in parallel
//! to show how the scores vary between iterations.
//!
//! ```text
//! cargo run -p chessboard --release -- [parking.toml]
//! ```
//!
//! The optional TOML file deserializes into `ParkingConfig`; missing keys
//! keep their defaults.

mod network;
mod scenario;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use pk_events::{EventRecorder, FrozenEvents, MobsimEvent, SearchTimeDiagnostic};
use pk_occupancy::{Initializer, ParkingConfig, ParkingReplay};
use pk_output::{CsvWriter, ReplayOutputObserver, SCORES_FILE, OCCUPANCY_FILE, write_search_times};

use network::{build_network, districts};
use scenario::Population;

// ── Constants ─────────────────────────────────────────────────────────────────

const PERSONS:    u32  = 400;
const SEED:       u64  = 42;
const ITERATIONS: u64  = 4;
const OUTPUT_DIR: &str = "output/chessboard";

fn load_config(path: &Path) -> Result<ParkingConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: ParkingConfig = toml::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

/// Feed a day through a fresh recorder and freeze it.
fn record(events: &[MobsimEvent]) -> Result<FrozenEvents> {
    let recorder = EventRecorder::new();
    for e in events {
        recorder.handle(e)?;
    }
    Ok(recorder.freeze()?)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => ParkingConfig::default(),
    };
    config.validate()?;
    println!("=== chessboard: parking replay ===");
    println!(
        "Persons: {PERSONS}  |  Seed: {SEED}  |  Kernel: {:?}, r = {} m  |  Initializer: {:?}",
        config.kernel, config.kernel_radius_m, config.initializer,
    );
    println!();

    // 1. Network and population.
    let segments = build_network(SEED)?;
    let (west, east) = districts(&segments);
    let population = Population::generate(PERSONS, &west, &east, SEED);
    let plans = population.plans();
    println!("Network: {} segments  |  Plans: {}", segments.len(), plans.len());

    // 2. Record one day; the search diagnostic sees the same stream.
    let day = population.day(SEED);
    let mut search = SearchTimeDiagnostic::new();
    for e in &day {
        search.observe(e)?;
    }
    let frozen = record(&day)?;
    println!(
        "Recorded {} unparks and {} parks ({} raw events)",
        frozen.unparks().len(),
        frozen.parks().len(),
        day.len(),
    );

    // 3. Replay into CSV.
    let replay = ParkingReplay::from_config(&segments, &config)?;
    let initializer = Initializer::build(config.initializer, Some(plans.as_slice()))?;

    let dir = Path::new(OUTPUT_DIR);
    std::fs::create_dir_all(dir)?;
    let mut obs = ReplayOutputObserver::new(CsvWriter::new(dir)?);

    let t0 = Instant::now();
    let outcome = replay.run(frozen, &initializer, &mut obs)?;
    let elapsed = t0.elapsed();
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }
    let search_path = write_search_times(dir, &search.density())?;

    println!("Replay complete in {:.3} ms", elapsed.as_secs_f64() * 1_000.0);
    println!("  {SCORES_FILE:<26}: {} rows", obs.scores_written());
    println!("  {OCCUPANCY_FILE:<26}: {} rows", outcome.state.len());
    println!("  {:<26}: {} searches", search_path.display(), search.samples().len());
    println!(
        "  end of day: {} cars parked, {} segments oversubscribed",
        outcome.state.total_occupancy(),
        outcome.state.oversubscribed(),
    );
    println!();

    // 4. Further iterations, replayed concurrently.
    let days = (1..=ITERATIONS)
        .map(|i| record(&population.day(SEED + i)))
        .collect::<Result<Vec<_>>>()?;
    let results = replay.replay_iterations(days, &initializer)?;

    println!("{:<10} {:>8} {:>12} {:>12}", "Iteration", "Scores", "Mean", "Max");
    println!("{}", "-".repeat(45));
    for (i, r) in results.iter().enumerate() {
        let n = r.signals.len().max(1) as f64;
        let mean = r.signals.iter().map(|s| s.amount).sum::<f64>() / n;
        let max = r.signals.iter().map(|s| s.amount).fold(0.0, f64::max);
        println!("{:<10} {:>8} {:>12.3} {:>12.3}", i + 1, r.signals.len(), mean, max);
    }

    Ok(())
}
