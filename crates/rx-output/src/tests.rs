//! Integration tests for rx-output.

#[cfg(test)]
mod csv_tests {
    use rx_core::{ParticleId, SimConfig, Species, Tick, Vec2};
    use rx_particle::{Particle, ParticleKind, PopulationSummary};
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{ParticleSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(id: u32, kind: ParticleKind) -> ParticleSnapshotRow {
        let p = Particle::new(ParticleId(id), kind, Vec2::new(10.0, 20.5), Vec2::new(-3.0, 4.0));
        ParticleSnapshotRow::new(0, Tick(5), &p)
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        let summary = PopulationSummary {
            amines:            [3, 2, 1, 0, 1],
            methyl_halides:    7,
            hydrogen_chloride: 2,
        };
        TickSummaryRow::new(0, Tick(tick), 0.5, &summary, 1, 4)
    }

    fn records(path: std::path::PathBuf) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("particle_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("particle_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, CsvWriter::SNAPSHOT_HEADERS);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, TickSummaryRow::HEADERS);
    }

    #[test]
    fn csv_snapshot_fields() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[
            snap_row(0, ParticleKind::Amine { methyl_count: 2 }),
            snap_row(1, ParticleKind::MethylHalide),
            snap_row(2, ParticleKind::HydrogenChloride { ttl: 120 }),
        ])
        .unwrap();
        w.finish().unwrap();

        let rows = records(dir.path().join("particle_snapshots.csv"));
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "0"); // run
        assert_eq!(&rows[0][1], "5"); // tick
        assert_eq!(&rows[0][3], "amine");
        assert_eq!(&rows[0][4], "2");
        assert_eq!(&rows[0][6], "20.5");
        assert_eq!(&rows[0][9], "10"); // radius 8 + 2
        assert_eq!(&rows[0][10], "", "amines have no ttl");

        assert_eq!(&rows[1][3], "methyl_halide");
        assert_eq!(&rows[1][4], "", "only amines carry a methyl count");

        assert_eq!(&rows[2][3], "hydrogen_chloride");
        assert_eq!(&rows[2][10], "120");
    }

    #[test]
    fn csv_tick_summary_fields() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let rows = records(dir.path().join("tick_summaries.csv"));
        assert_eq!(rows.len(), 1);
        let got: Vec<&str> = rows[0].iter().collect();
        assert_eq!(got, ["0", "3", "0.5", "3", "2", "1", "0", "1", "7", "2", "1", "4"]);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("does/not/exist")).is_err());
    }

    #[test]
    fn snapshot_row_from_particle() {
        let row = snap_row(9, ParticleKind::Amine { methyl_count: 4 });
        assert_eq!(row.particle_id, 9);
        assert_eq!(row.species, Species::Amine);
        assert_eq!(row.methyl_count, Some(4));
        assert_eq!(row.radius, 12.0);
        assert_eq!(row.ttl, None);
        assert_eq!((row.vx, row.vy), (-3.0, 4.0));
    }

    #[test]
    fn integration_csv() {
        use rx_sim::SimBuilder;

        use crate::observer::SimOutputObserver;

        let config = SimConfig {
            total_ticks: 6,
            seed: 1,
            amine_count: 3,
            methyl_halide_count: 2,
            output_interval_ticks: 2,
            ..SimConfig::default()
        };
        let mut sim = SimBuilder::new(config.clone()).build().unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, &config);
        sim.run(&mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");

        let summaries = records(dir.path().join("tick_summaries.csv"));
        assert_eq!(summaries.len(), 6);
        assert_eq!(&summaries[5][1], "5");
        assert_eq!(&summaries[5][2], "0.1", "six frames at 60 fps");

        // Snapshots at ticks 0, 2, 4; the flask holds at least the 3 amines.
        let snaps = records(dir.path().join("particle_snapshots.csv"));
        let ticks: std::collections::BTreeSet<&str> = snaps.iter().map(|r| r.get(1).unwrap()).collect();
        assert_eq!(ticks.into_iter().collect::<Vec<_>>(), ["0", "2", "4"]);
        let amines = snaps.iter().filter(|r| &r[3] == "amine").count();
        assert_eq!(amines, 9);
    }

    #[test]
    fn reset_starts_a_new_run() {
        use rx_sim::SimBuilder;

        use crate::observer::SimOutputObserver;

        let config = SimConfig { seed: 4, output_interval_ticks: 0, ..SimConfig::default() };
        let mut sim = SimBuilder::new(config.clone()).build().unwrap();
        let dir = tmp();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap(), &config);

        sim.run_ticks(3, &mut obs);
        sim.reset(5, 5, &mut obs).unwrap();
        assert_eq!(obs.run(), 1);
        sim.run_ticks(2, &mut obs);
        obs.finish();
        assert!(obs.take_error().is_none());

        let rows = records(dir.path().join("tick_summaries.csv"));
        let keys: Vec<(&str, &str)> = rows.iter().map(|r| (&r[0], &r[1])).collect();
        assert_eq!(keys, [("0", "0"), ("0", "1"), ("0", "2"), ("1", "0"), ("1", "1")]);
        let amines: u32 = (3..8).map(|c| rows[3][c].parse::<u32>().unwrap()).sum();
        assert_eq!(amines, 5, "second run starts with the reset counts");
    }
}

// ── Observer error handling ───────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use rx_core::SimConfig;
    use rx_sim::SimBuilder;

    use crate::observer::SimOutputObserver;
    use crate::row::{ParticleSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    /// Fails every summary write after the first `ok` of them.
    struct FlakyWriter {
        ok:       usize,
        written:  usize,
        finished: usize,
    }

    impl OutputWriter for FlakyWriter {
        fn write_snapshots(&mut self, _rows: &[ParticleSnapshotRow]) -> OutputResult<()> {
            Ok(())
        }
        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            self.written += 1;
            if self.written > self.ok {
                let msg = format!("write {}", self.written);
                return Err(OutputError::Io(std::io::Error::other(msg)));
            }
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn keeps_first_error_and_finishes() {
        let config = SimConfig { total_ticks: 5, seed: 2, ..SimConfig::default() };
        let mut sim = SimBuilder::new(config.clone()).build().unwrap();
        let mut obs = SimOutputObserver::new(FlakyWriter { ok: 2, written: 0, finished: 0 }, &config);
        sim.run(&mut obs);

        let err = obs.take_error().expect("writes 3..=5 fail");
        assert!(err.to_string().contains("write 3"), "{err}");
        assert!(obs.take_error().is_none(), "error is taken once");

        let writer = obs.into_writer();
        assert_eq!(writer.written, 5, "the run keeps going after a failure");
        assert_eq!(writer.finished, 1);
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use rx_core::{ParticleId, SimConfig, Tick, Vec2};
    use rx_particle::{Particle, ParticleKind, PopulationSummary};
    use tempfile::TempDir;

    use crate::row::{ParticleSnapshotRow, TickSummaryRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn row(id: u32, kind: ParticleKind) -> ParticleSnapshotRow {
        let p = Particle::new(ParticleId(id), kind, Vec2::new(1.0, 2.0), Vec2::ZERO);
        ParticleSnapshotRow::new(0, Tick(1), &p)
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_snapshot_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[
            row(0, ParticleKind::Amine { methyl_count: 0 }),
            row(1, ParticleKind::MethylHalide),
            row(2, ParticleKind::HydrogenChloride { ttl: 10 }),
        ])
        .unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM particle_snapshots", [], |r| r.get(0)).unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn sqlite_optional_columns_are_null() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[row(0, ParticleKind::MethylHalide)]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (methyl, ttl, species): (Option<i64>, Option<i64>, String) = conn
            .query_row(
                "SELECT methyl_count, ttl, species FROM particle_snapshots WHERE particle_id = 0",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .unwrap();
        assert_eq!((methyl, ttl), (None, None));
        assert_eq!(species, "methyl_halide");
    }

    #[test]
    fn sqlite_tick_summary_stored() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let summary = PopulationSummary { amines: [1, 2, 3, 4, 5], methyl_halides: 6, hydrogen_chloride: 7 };
        w.write_tick_summary(&TickSummaryRow::new(0, Tick(9), 1.0, &summary, 2, 3)).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (a4, hcl, bounces): (i64, i64, i64) = conn
            .query_row(
                "SELECT amine_4, hydrogen_chloride, bounces FROM tick_summaries WHERE tick = 9",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .unwrap();
        assert_eq!((a4, hcl, bounces), (5, 7, 3));
    }

    #[test]
    fn sqlite_finish_idempotent() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn integration_sqlite() {
        use rx_sim::SimBuilder;

        use crate::observer::SimOutputObserver;

        let config = SimConfig {
            total_ticks: 4,
            seed: 3,
            amine_count: 2,
            methyl_halide_count: 2,
            output_interval_ticks: 1,
            ..SimConfig::default()
        };
        let mut sim = SimBuilder::new(config.clone()).build().unwrap();
        let dir = tmp();
        let mut obs = SimOutputObserver::new(SqliteWriter::new(dir.path()).unwrap(), &config);
        sim.run(&mut obs);
        assert!(obs.take_error().is_none());

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let ticks: i64 = conn.query_row("SELECT COUNT(*) FROM tick_summaries", [], |r| r.get(0)).unwrap();
        assert_eq!(ticks, 4);
        let snapshot_ticks: i64 = conn
            .query_row("SELECT COUNT(DISTINCT tick) FROM particle_snapshots", [], |r| r.get(0))
            .unwrap();
        assert_eq!(snapshot_ticks, 4);
    }

    #[test]
    fn reset_runs_share_one_database() {
        use rx_sim::SimBuilder;

        use crate::observer::SimOutputObserver;

        let config = SimConfig { seed: 6, output_interval_ticks: 1, ..SimConfig::default() };
        let mut sim = SimBuilder::new(config.clone()).build().unwrap();
        let dir = tmp();
        let mut obs = SimOutputObserver::new(SqliteWriter::new(dir.path()).unwrap(), &config);

        sim.run_ticks(3, &mut obs);
        sim.reset(5, 5, &mut obs).unwrap();
        sim.run_ticks(3, &mut obs);
        obs.finish();
        assert!(obs.take_error().is_none(), "tick numbers restart without key clashes");

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let per_run: Vec<(i64, i64)> = conn
            .prepare("SELECT run, COUNT(*) FROM tick_summaries GROUP BY run ORDER BY run")
            .unwrap()
            .query_map([], |r| Ok((r.get(0)?, r.get(1)?)))
            .unwrap()
            .map(|r| r.unwrap())
            .collect();
        assert_eq!(per_run, [(0, 3), (1, 3)]);

        let second_run: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM particle_snapshots WHERE run = 1 AND tick = 0",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(second_run, 10, "5 amines + 5 halides right after the reset");
    }
}
