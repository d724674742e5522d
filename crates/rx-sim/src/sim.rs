//! The `Sim` struct and its step loop.

use log::debug;
use rx_core::{SimClock, SimConfig, SimRng, Tick};
use rx_particle::{Population, PopulationBuilder, PopulationSummary, Preset};

use crate::step::{StepReport, advance};
use crate::{SimObserver, SimResult};

/// The reaction-flask simulation.
///
/// `Sim` owns the population, the clock, and the only RNG stream, and
/// drives the four-phase step described on [`advance`].  Hosts get shared
/// access to the population through [`population`](Self::population) and the
/// observer hooks; only the step loop and [`reset`](Self::reset) mutate it.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run configuration (world size, frame rate, seed, …).
    pub config: SimConfig,

    /// Tracks the current tick.
    pub clock: SimClock,

    pub(crate) population: Population,
    pub(crate) rng:        SimRng,
}

impl Sim {
    // ── Queries ───────────────────────────────────────────────────────────

    /// Read-only view of every particle.
    #[inline]
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Current counts per bucket.  Pure.
    pub fn summary(&self) -> PopulationSummary {
        self.population.summary()
    }

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance exactly one tick.
    pub fn step(&mut self) -> StepReport {
        let now = self.clock.current_tick;
        let report = advance(&mut self.population, &self.config, &mut self.rng, now);
        self.clock.advance();
        report
    }

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Does nothing when `total_ticks` is 0 (host-driven mode); use
    /// [`step`](Self::step) or [`run_ticks`](Self::run_ticks) instead.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.clock.current_tick < self.config.end_tick() {
            self.observed_step(observer);
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.observed_step(observer);
        }
    }

    fn observed_step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let report = self.step();
        observer.on_tick_end(now, &report, &self.population.summary());
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.population);
        }
    }

    // ── Reset ─────────────────────────────────────────────────────────────

    /// Discard the population and build a fresh one with the given counts.
    ///
    /// The clock returns to tick 0 and the counts are stored on `config`.
    /// The RNG stream continues, so successive resets lay out different
    /// flasks; rebuild the `Sim` to replay from the seed.  On error the
    /// existing population is left untouched.
    pub fn reset<O: SimObserver>(
        &mut self,
        amines:         usize,
        methyl_halides: usize,
        observer:       &mut O,
    ) -> SimResult<()> {
        let population = PopulationBuilder::new(amines, methyl_halides)
            .build(&self.config, &mut self.rng)?;

        self.population = population;
        self.config.amine_count = amines;
        self.config.methyl_halide_count = methyl_halides;
        self.clock.reset();

        let summary = self.population.summary();
        debug!("reset flask: {summary}");
        observer.on_reset(&summary);
        Ok(())
    }

    /// [`reset`](Self::reset) with a preset mixture.
    pub fn reset_preset<O: SimObserver>(&mut self, preset: Preset, observer: &mut O) -> SimResult<()> {
        let (amines, halides) = preset.counts();
        self.reset(amines, halides, observer)
    }
}
