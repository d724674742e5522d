//! Simulation observer trait for progress reporting and data collection.

use rx_core::Tick;
use rx_particle::{Population, PopulationSummary};

use crate::StepReport;

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the step loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers only ever see shared references:
/// the population stays owned by the simulation between steps.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, report: &StepReport, summary: &PopulationSummary) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {} reactions, {summary}", report.reaction_count());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with what the step did and the
    /// resulting counts.
    fn on_tick_end(&mut self, _tick: Tick, _report: &StepReport, _summary: &PopulationSummary) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with read-only access to every particle.
    fn on_snapshot(&mut self, _tick: Tick, _population: &Population) {}

    /// Called after the population has been rebuilt by
    /// [`Sim::reset`][crate::Sim::reset].
    fn on_reset(&mut self, _summary: &PopulationSummary) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
