//! open_box — generate a batch of rat trajectories in a walled arena.
//!
//! ```text
//! open_box [CONFIG_JSON] [WALLS_CSV]
//! ```
//!
//! Without arguments, runs the default configuration in the 2.2 m × 2.2 m
//! reference box.  `CONFIG_JSON` is a (possibly partial) `SimConfig`; missing
//! fields keep their defaults.  `WALLS_CSV` replaces the box with an arbitrary
//! wall set (see `rat_spatial::loader` for the format).
//!
//! Output goes to `output/open_box/`.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use rat_core::{Point, SimConfig};
use rat_output::{CsvWriter, OutputWriter, SimOutputObserver};
use rat_sim::{BatchBuilder, SimObserver, Trajectory};
use rat_spatial::{Arena, Boundary, load_walls_csv};

// ── Constants ─────────────────────────────────────────────────────────────────

const BOX_SIDE:       f64   = 2.2;
const OUTPUT_DIR:     &str  = "output/open_box";
const PROGRESS_EVERY: u32   = 16;
const TABLE_ROWS:     usize = 8;

// ── Observer wrapper to count rows and report progress ───────────────────────

struct ProgressObserver<W: OutputWriter> {
    inner:        SimOutputObserver<W>,
    step_rows:    usize,
    summary_rows: usize,
}

impl<W: OutputWriter> ProgressObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, step_rows: 0, summary_rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for ProgressObserver<W> {
    fn on_trajectory_end(&mut self, trajectory: &Trajectory) {
        self.step_rows += trajectory.len();
        self.summary_rows += 1;
        if (trajectory.id.0 + 1) % PROGRESS_EVERY == 0 {
            println!("  … {} trajectories", trajectory.id.0 + 1);
        }
        self.inner.on_trajectory_end(trajectory);
    }

    fn on_batch_end(&mut self, trajectories: &[Trajectory]) {
        self.inner.on_batch_end(trajectories);
    }
}

// ── Setup helpers ─────────────────────────────────────────────────────────────

fn load_config(path: Option<&str>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
}

fn load_arena(path: Option<&str>, soft_boundary: f64) -> Result<Arena> {
    let arena = match path {
        Some(path) => load_walls_csv(Path::new(path), soft_boundary)
            .with_context(|| format!("loading walls from {path}"))?,
        None => Arena::rectangle(Point::ZERO, Point::new(BOX_SIDE, BOX_SIDE), soft_boundary)?,
    };
    Ok(arena)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = load_config(args.first().map(String::as_str))?;
    let arena = load_arena(args.get(1).map(String::as_str), config.soft_boundary)?;

    println!("=== open_box — ratsim trajectory generator ===");
    println!(
        "Trajectories: {}  |  Steps: {}  |  Seed: {}  |  Policy: {}",
        config.batch_size, config.seq_len, config.seed, config.motion.boundary_mode
    );
    println!(
        "Arena: {} walls ({}), bounds {} – {}, soft boundary {}",
        arena.wall_count(),
        match arena.boundary() {
            Boundary::Rectangle => "rectangle",
            Boundary::Polygon => "polygon",
        },
        arena.origin(),
        arena.extent(),
        arena.soft_boundary(),
    );
    println!();

    // 1. Validate and build the batch.
    let batch = BatchBuilder::new(config).build()?;

    // 2. Set up output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = ProgressObserver::new(SimOutputObserver::new(writer));

    // 3. Run.
    let t0 = Instant::now();
    let trajectories = batch.generate(&arena, &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    println!("Generated {} trajectories in {:.3} s", trajectories.len(), elapsed.as_secs_f64());
    println!("  trajectory_steps.csv     : {} rows", obs.step_rows);
    println!("  trajectory_summaries.csv : {} rows", obs.summary_rows);
    println!();

    // 5. First few trajectories.
    println!("{:<6} {:>10} {:>10} {:>22}", "Id", "Path (m)", "Mean m/s", "Final position");
    println!("{}", "-".repeat(51));
    for t in trajectories.iter().take(TABLE_ROWS) {
        let end = t.positions.last().copied().unwrap_or(Point::ZERO);
        println!(
            "{:<6} {:>10.3} {:>10.3} {:>22}",
            t.id.0,
            t.path_length(),
            t.mean_speed(),
            format!("({:.3}, {:.3})", end.x, end.y),
        );
    }

    Ok(())
}
