//! Plain data row types written by output backends.

use rx_core::{Species, Tick};
use rx_particle::{Particle, PopulationSummary};

/// One particle's state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSnapshotRow {
    /// Population generation; bumped by every `Sim::reset`.
    pub run:          u32,
    pub tick:         u64,
    pub particle_id:  u32,
    pub species:      Species,
    /// `None` for anything that is not an amine.
    pub methyl_count: Option<u8>,
    pub x:            f32,
    pub y:            f32,
    pub vx:           f32,
    pub vy:           f32,
    pub radius:       f32,
    /// Remaining frames; `None` for permanent species.
    pub ttl:          Option<u32>,
}

impl ParticleSnapshotRow {
    pub fn new(run: u32, tick: Tick, p: &Particle) -> Self {
        Self {
            run,
            tick:         tick.0,
            particle_id:  p.id.0,
            species:      p.species(),
            methyl_count: p.methyl_count(),
            x:            p.pos.x,
            y:            p.pos.y,
            vx:           p.vel.x,
            vy:           p.vel.y,
            radius:       p.radius(),
            ttl:          p.ttl(),
        }
    }
}

/// Counts and activity for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    /// Population generation; ticks restart from 0 in each run.
    pub run:               u32,
    pub tick:              u64,
    /// Simulated seconds at the end of the tick.
    pub elapsed_secs:      f64,
    /// Amines bucketed by methyl count 0..=4.
    pub amines:            [u64; 5],
    pub methyl_halide:     u64,
    pub hydrogen_chloride: u64,
    pub reactions:         u64,
    pub bounces:           u64,
}

impl TickSummaryRow {
    pub const HEADERS: [&'static str; 12] = [
        "run",
        "tick",
        "elapsed_secs",
        "amine_0",
        "amine_1",
        "amine_2",
        "amine_3",
        "amine_4",
        "methyl_halide",
        "hydrogen_chloride",
        "reactions",
        "bounces",
    ];

    pub fn new(
        run:          u32,
        tick:         Tick,
        elapsed_secs: f64,
        summary:      &PopulationSummary,
        reactions:    usize,
        bounces:      usize,
    ) -> Self {
        Self {
            run,
            tick: tick.0,
            elapsed_secs,
            amines: summary.amines.map(|n| n as u64),
            methyl_halide: summary.methyl_halides as u64,
            hydrogen_chloride: summary.hydrogen_chloride as u64,
            reactions: reactions as u64,
            bounces: bounces as u64,
        }
    }
}
