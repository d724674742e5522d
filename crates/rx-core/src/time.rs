//! Simulation time model and run configuration.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter, one tick per rendered
//! frame.  The mapping to simulated seconds is held in `SimClock`:
//!
//!   elapsed_secs = tick / fps
//!
//! Using an integer tick as the canonical time unit keeps lifetimes exact
//! (a byproduct lives a whole number of frames) while the integrator works in
//! seconds via `SimConfig::dt()`.

use std::fmt;

use crate::{Bounds, RxError, RxResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick (frame) counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between frame counts and simulated seconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Frames per simulated second.
    pub fps: u32,
    /// The current tick, advanced by `SimClock::advance()` each step.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(fps: u32) -> Self {
        Self { fps, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Rewind to tick 0 (population reset).
    #[inline]
    pub fn reset(&mut self) {
        self.current_tick = Tick::ZERO;
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.0 as f64 / self.fps as f64
    }

    /// How many whole frames span `secs` seconds (rounded to nearest).
    #[inline]
    pub fn ticks_for_secs(&self, secs: f32) -> u64 {
        (secs as f64 * self.fps as f64).round() as u64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2} s)", self.current_tick, self.elapsed_secs())
    }
}

// ── BroadPhase ────────────────────────────────────────────────────────────────

/// Candidate-pair generation strategy for contact detection.
///
/// Both strategies yield the same contact list; they differ only in cost.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BroadPhase {
    /// Test every unordered pair.  O(n²); fastest below a few hundred particles.
    #[default]
    AllPairs,
    /// Bulk-load an R-tree each step and query neighbourhoods.  O(n log n).
    RTree,
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// `Default` reproduces the classic 640 × 640 flask at 60 fps with 50 amine
/// and 50 methyl-halide molecules.  Typically loaded from a JSON file by the
/// host application and passed to `rx_sim::SimBuilder`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// World width in simulation units.
    pub width: f32,

    /// World height in simulation units.
    pub height: f32,

    /// Frames per simulated second.  Δt = 1 / fps.
    pub fps: u32,

    /// Total ticks for `Sim::run`.  `0` means the host drives the loop.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Amines (all unmethylated) created on each reset.
    pub amine_count: usize,

    /// Methyl halides created on each reset.
    pub methyl_halide_count: usize,

    /// Velocity components are drawn uniformly from `[-max_speed, max_speed)`.
    pub max_speed: f32,

    /// Particles are spawned at least this far from every wall.
    pub spawn_margin: f32,

    /// Byproduct lifetime in seconds; converted to whole frames.
    pub hcl_lifetime_secs: f32,

    /// Frames of highlight after an amine reacts.
    pub flash_frames: u32,

    /// Emit a population snapshot every N ticks.  `0` disables snapshots.
    pub output_interval_ticks: u64,

    /// Contact-detection strategy.
    pub broad_phase: BroadPhase,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width:                 640.0,
            height:                640.0,
            fps:                   60,
            total_ticks:           0,
            seed:                  0,
            amine_count:           50,
            methyl_halide_count:   50,
            max_speed:             70.0,
            spawn_margin:          20.0,
            hcl_lifetime_secs:     5.0,
            flash_frames:          6,
            output_interval_ticks: 0,
            broad_phase:           BroadPhase::AllPairs,
        }
    }
}

impl SimConfig {
    /// Fixed integration timestep in seconds.
    #[inline]
    pub fn dt(&self) -> f32 {
        1.0 / self.fps as f32
    }

    /// The simulated region.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    /// Byproduct lifetime in whole frames (`5 s × 60 fps = 300` by default).
    #[inline]
    pub fn hcl_lifetime_ticks(&self) -> u32 {
        u32::try_from(self.make_clock().ticks_for_secs(self.hcl_lifetime_secs)).unwrap_or(u32::MAX)
    }

    /// The tick at which `Sim::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.fps)
    }

    /// Reject values that would make the world, the timestep, or the spawn
    /// region meaningless.  Nothing is clamped.
    pub fn validate(&self) -> RxResult<()> {
        fn bad(msg: String) -> RxResult<()> {
            Err(RxError::InvalidConfiguration(msg))
        }

        if !(self.width.is_finite() && self.width > 0.0) {
            return bad(format!("width must be finite and positive, got {}", self.width));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return bad(format!("height must be finite and positive, got {}", self.height));
        }
        if self.fps == 0 {
            return bad("fps must be at least 1".into());
        }
        if !(self.max_speed.is_finite() && self.max_speed >= 0.0) {
            return bad(format!("max_speed must be finite and non-negative, got {}", self.max_speed));
        }
        if !(self.spawn_margin.is_finite() && self.spawn_margin >= 0.0) {
            return bad(format!(
                "spawn_margin must be finite and non-negative, got {}",
                self.spawn_margin
            ));
        }
        if self.bounds().inset(self.spawn_margin).is_none() {
            return bad(format!(
                "spawn_margin {} leaves no interior in a {} world",
                self.spawn_margin,
                self.bounds()
            ));
        }
        if !self.hcl_lifetime_secs.is_finite() || self.hcl_lifetime_ticks() == 0 {
            return bad(format!(
                "hcl_lifetime_secs must cover at least one frame, got {}",
                self.hcl_lifetime_secs
            ));
        }
        Ok(())
    }
}
