//! flask — headless run of the methylation reaction flask.
//!
//! Ammonia is methylated one group at a time by methyl chloride until it
//! reaches the quaternary ammonium ion; every step releases one HCl that
//! fades after a few seconds.  The run writes per-tick counts and periodic
//! particle snapshots, then prints the final distribution.
//!
//! ```text
//! flask --preset excess-halide --ticks 7200 --output output/flask
//! RUST_LOG=debug flask --config flask.json --rtree
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use rx_core::{BroadPhase, SimConfig, Species, Tick};
use rx_output::{CsvWriter, OutputWriter, SimOutputObserver};
use rx_particle::{Population, PopulationSummary, Preset};
use rx_sim::{SimBuilder, SimObserver, StepReport};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_SECONDS:  u64 = 60;
const PROGRESS_SECONDS: u64 = 10;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Mixture {
    /// 50 amines, 50 methyl halides.
    Default,
    /// 160 amines, 20 methyl halides.
    ExcessAmine,
    /// 20 amines, 160 methyl halides.
    ExcessHalide,
}

impl From<Mixture> for Preset {
    fn from(m: Mixture) -> Self {
        match m {
            Mixture::Default      => Preset::Balanced,
            Mixture::ExcessAmine  => Preset::ExcessAmine,
            Mixture::ExcessHalide => Preset::ExcessHalide,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "flask")]
#[command(about = "Sequential amine methylation in a 2-D flask", long_about = None)]
struct Cli {
    /// JSON file with `SimConfig` fields; flags override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting amine count.
    #[arg(long)]
    amines: Option<usize>,

    /// Starting methyl halide count.
    #[arg(long)]
    halides: Option<usize>,

    /// Starting mixture; `--amines`/`--halides` override its counts.
    #[arg(long, value_enum)]
    preset: Option<Mixture>,

    #[arg(long)]
    seed: Option<u64>,

    /// Frames to simulate (default: one minute of simulated time).
    #[arg(long)]
    ticks: Option<u64>,

    /// Directory for `tick_summaries.csv` and `particle_snapshots.csv`.
    #[arg(long, default_value = "output/flask")]
    output: PathBuf,

    /// Snapshot every K ticks (0 disables snapshots).
    #[arg(long)]
    interval: Option<u64>,

    /// Use the R-tree broad phase instead of all pairs.
    #[arg(long)]
    rtree: bool,
}

impl Cli {
    fn sim_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
            }
            None => SimConfig::default(),
        };

        if let Some(preset) = self.preset {
            let (amines, halides) = Preset::from(preset).counts();
            config.amine_count = amines;
            config.methyl_halide_count = halides;
        }
        if let Some(n) = self.amines {
            config.amine_count = n;
        }
        if let Some(n) = self.halides {
            config.methyl_halide_count = n;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(ticks) = self.ticks {
            config.total_ticks = ticks;
        }
        if config.total_ticks == 0 {
            config.total_ticks = DEFAULT_SECONDS * config.fps as u64;
        }
        if let Some(k) = self.interval {
            config.output_interval_ticks = k;
        }
        if self.rtree {
            config.broad_phase = BroadPhase::RTree;
        }
        Ok(config)
    }
}

// ── Observer wrapper: row counts and progress ─────────────────────────────────

struct ProgressObserver<W: OutputWriter> {
    inner:          SimOutputObserver<W>,
    every:          u64,
    reactions:      usize,
    snapshot_rows:  usize,
    summary_rows:   usize,
}

impl<W: OutputWriter> ProgressObserver<W> {
    fn new(inner: SimOutputObserver<W>, every: u64) -> Self {
        Self { inner, every, reactions: 0, snapshot_rows: 0, summary_rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for ProgressObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, report: &StepReport, summary: &PopulationSummary) {
        self.summary_rows += 1;
        self.reactions += report.reaction_count();
        if self.every > 0 && (tick.0 + 1).is_multiple_of(self.every) {
            info!("{tick}: {summary}");
        }
        self.inner.on_tick_end(tick, report, summary);
    }

    fn on_snapshot(&mut self, tick: Tick, population: &Population) {
        self.snapshot_rows += population.len();
        self.inner.on_snapshot(tick, population);
    }

    fn on_reset(&mut self, summary: &PopulationSummary) {
        self.inner.on_reset(summary);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = cli.sim_config()?;

    println!("=== flask — amine methylation ===");
    println!(
        "World: {}  |  Amines: {}  |  Methyl halides: {}  |  Seed: {}",
        config.bounds(),
        config.amine_count,
        config.methyl_halide_count,
        config.seed
    );
    println!(
        "Sim: {} ticks ({:.1} s at {} fps), snapshot every {} ticks, {:?} broad phase",
        config.total_ticks,
        config.total_ticks as f64 / config.fps as f64,
        config.fps,
        config.output_interval_ticks,
        config.broad_phase
    );
    println!();

    let mut sim = SimBuilder::new(config.clone()).build()?;

    fs::create_dir_all(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;
    let writer = CsvWriter::new(Path::new(&cli.output))?;
    let every = PROGRESS_SECONDS * config.fps as u64;
    let mut obs = ProgressObserver::new(SimOutputObserver::new(writer, &config), every);

    info!("running {} ticks into {}", config.total_ticks, cli.output.display());
    let t0 = Instant::now();
    sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    println!("Simulation complete in {:.3} s (clock at {})", elapsed.as_secs_f64(), sim.clock);
    println!("  reactions             : {}", obs.reactions);
    println!("  tick_summaries.csv    : {} rows", obs.summary_rows);
    println!("  particle_snapshots.csv: {} rows", obs.snapshot_rows);
    println!();

    print_table(&sim.summary());
    Ok(())
}

fn print_table(summary: &PopulationSummary) {
    println!("{:<12} {:>6}", "Species", "Count");
    println!("{}", "-".repeat(19));
    for (label, n) in PopulationSummary::AMINE_LABELS.iter().zip(summary.amines) {
        println!("{label:<12} {n:>6}");
    }
    println!("{:<12} {:>6}", Species::MethylHalide.formula(), summary.methyl_halides);
    println!("{:<12} {:>6}", Species::HydrogenChloride.formula(), summary.hydrogen_chloride);
    println!("{}", "-".repeat(19));
    println!(
        "methyl groups on amines: {} of {}",
        summary.methyl_groups(),
        summary.methyl_inventory()
    );
}
