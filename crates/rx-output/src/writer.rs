//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, ParticleSnapshotRow, TickSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors surface to the observer, which keeps the first one for
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of particle snapshots.
    fn write_snapshots(&mut self, rows: &[ParticleSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.  Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
