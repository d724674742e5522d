//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use rx_core::{SimConfig, Tick};
use rx_particle::{Population, PopulationSummary};
use rx_sim::{SimObserver, StepReport};

use crate::row::{ParticleSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes tick summaries and particle snapshots to
/// any [`OutputWriter`] backend.
///
/// Each [`Sim::reset`][rx_sim::Sim::reset] starts a new `run`: ticks restart
/// from 0, and every row carries the run it belongs to.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    fps:        u32,
    run:        u32,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config.fps` to convert
    /// ticks to simulated seconds.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self { writer, fps: config.fps, run: 0, last_error: None }
    }

    /// The run rows are currently tagged with (0 until the first reset).
    #[inline]
    pub fn run(&self) -> u32 {
        self.run
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Flush the writer outside of `run` (for `run_ticks` / `step` hosts).
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, report: &StepReport, summary: &PopulationSummary) {
        let elapsed = (tick.0 + 1) as f64 / self.fps.max(1) as f64;
        let row = TickSummaryRow::new(
            self.run,
            tick,
            elapsed,
            summary,
            report.reaction_count(),
            report.bounces,
        );
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, population: &Population) {
        let rows: Vec<ParticleSnapshotRow> =
            population.iter().map(|p| ParticleSnapshotRow::new(self.run, tick, p)).collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_reset(&mut self, _summary: &PopulationSummary) {
        self.run += 1;
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        self.finish();
    }
}
