//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! A simulation owns exactly one `SimRng`, seeded from `SimConfig::seed`.
//! Every random draw (initial placement, initial velocities, byproduct
//! velocities) is taken from that single stream in a fixed order:
//!
//! - population construction draws per particle, in creation order;
//! - the step loop draws one velocity per reaction, in the order the
//!   reactions are resolved (ascending contact-pair order).
//!
//! Because contact resolution is always sequential, the same seed and config
//! reproduce a run exactly, with or without the parallel detection phase.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Vec2;

/// Simulation-level RNG.
///
/// Used only from the single-threaded phases of a step; detection never
/// draws.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// A velocity whose components are each uniform in `[-max_speed, max_speed)`.
    ///
    /// `max_speed <= 0` yields a particle at rest.
    pub fn velocity(&mut self, max_speed: f32) -> Vec2 {
        if max_speed <= 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(
            self.0.gen_range(-max_speed..max_speed),
            self.0.gen_range(-max_speed..max_speed),
        )
    }

    /// A point uniform in the half-open box `[min, max)`.
    ///
    /// # Panics
    /// Panics if `min` is not strictly below `max` on both axes.
    pub fn point_in(&mut self, min: Vec2, max: Vec2) -> Vec2 {
        Vec2::new(
            self.0.gen_range(min.x..max.x),
            self.0.gen_range(min.y..max.y),
        )
    }
}
