//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `particle_snapshots` and `tick_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{OutputResult, ParticleSnapshotRow, TickSummaryRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS particle_snapshots (
                 run          INTEGER NOT NULL,
                 tick         INTEGER NOT NULL,
                 particle_id  INTEGER NOT NULL,
                 species      TEXT    NOT NULL,
                 methyl_count INTEGER,
                 x            REAL    NOT NULL,
                 y            REAL    NOT NULL,
                 vx           REAL    NOT NULL,
                 vy           REAL    NOT NULL,
                 radius       REAL    NOT NULL,
                 ttl          INTEGER
             );
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 run               INTEGER NOT NULL,
                 tick              INTEGER NOT NULL,
                 elapsed_secs      REAL    NOT NULL,
                 amine_0           INTEGER NOT NULL,
                 amine_1           INTEGER NOT NULL,
                 amine_2           INTEGER NOT NULL,
                 amine_3           INTEGER NOT NULL,
                 amine_4           INTEGER NOT NULL,
                 methyl_halide     INTEGER NOT NULL,
                 hydrogen_chloride INTEGER NOT NULL,
                 reactions         INTEGER NOT NULL,
                 bounces           INTEGER NOT NULL,
                 PRIMARY KEY (run, tick)
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_snapshots(&mut self, rows: &[ParticleSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO particle_snapshots \
                 (run, tick, particle_id, species, methyl_count, x, y, vx, vy, radius, ttl) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.run,
                    row.tick as i64,
                    row.particle_id,
                    row.species.as_str(),
                    row.methyl_count,
                    row.x as f64,
                    row.y as f64,
                    row.vx as f64,
                    row.vy as f64,
                    row.radius as f64,
                    row.ttl,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        let [a0, a1, a2, a3, a4] = row.amines.map(|n| n as i64);
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO tick_summaries \
             (run, tick, elapsed_secs, amine_0, amine_1, amine_2, amine_3, amine_4, \
              methyl_halide, hydrogen_chloride, reactions, bounces) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        )?;
        stmt.execute(rusqlite::params![
            row.run,
            row.tick as i64,
            row.elapsed_secs,
            a0,
            a1,
            a2,
            a3,
            a4,
            row.methyl_halide as i64,
            row.hydrogen_chloride as i64,
            row.reactions as i64,
            row.bounces as i64,
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
