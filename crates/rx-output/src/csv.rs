//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `particle_snapshots.csv`
//! - `tick_summaries.csv`
//!
//! Optional fields (`methyl_count`, `ttl`) are written as empty cells.
//! Every row leads with its `run`, so output recorded across resets stays
//! separable.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, ParticleSnapshotRow, TickSummaryRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    pub const SNAPSHOT_HEADERS: [&'static str; 11] = [
        "run",
        "tick",
        "particle_id",
        "species",
        "methyl_count",
        "x",
        "y",
        "vx",
        "vy",
        "radius",
        "ttl",
    ];

    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("particle_snapshots.csv"))?;
        snapshots.write_record(Self::SNAPSHOT_HEADERS)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(TickSummaryRow::HEADERS)?;

        Ok(Self { snapshots, summaries, finished: false })
    }
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[ParticleSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.run.to_string(),
                row.tick.to_string(),
                row.particle_id.to_string(),
                row.species.as_str().to_owned(),
                optional(row.methyl_count),
                row.x.to_string(),
                row.y.to_string(),
                row.vx.to_string(),
                row.vy.to_string(),
                row.radius.to_string(),
                optional(row.ttl),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        let mut record = Vec::with_capacity(TickSummaryRow::HEADERS.len());
        record.push(row.run.to_string());
        record.push(row.tick.to_string());
        record.push(row.elapsed_secs.to_string());
        record.extend(row.amines.iter().map(u64::to_string));
        record.push(row.methyl_halide.to_string());
        record.push(row.hydrogen_chloride.to_string());
        record.push(row.reactions.to_string());
        record.push(row.bounces.to_string());
        self.summaries.write_record(&record)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
