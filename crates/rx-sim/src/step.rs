//! One fixed-timestep advance of a population.

use log::debug;
use rx_core::{SimConfig, SimRng, Tick};
use rx_particle::Population;
use rx_spatial::find_contacts;

use crate::physics::integrate;
use crate::reaction::{ReactionEvent, prune_expired, resolve_contacts};

/// What happened during one step.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepReport {
    /// The tick this step processed (the clock reads `tick + 1` afterwards).
    pub tick:      Tick,
    /// Methylations, in resolution order.  One byproduct each.
    pub reactions: Vec<ReactionEvent>,
    pub bounces:   usize,
    /// Overlapping pairs found by detection, including skipped ones.
    pub contacts:  usize,
    /// Byproducts pruned at the end of the step.
    pub expired:   usize,
}

impl StepReport {
    #[inline]
    pub fn reaction_count(&self) -> usize {
        self.reactions.len()
    }
}

/// Advance `population` by one tick of `config.dt()`.
///
/// Phases, in order:
///
/// 1. **Integrate**: move, reflect off the walls, age ttl/flash.
/// 2. **Detect**: find overlapping pairs (read-only; parallel with the
///    `parallel` feature).
/// 3. **Resolve**: methylate or bounce each contact in `(i, j)` order;
///    compact consumed halides; append byproducts.
/// 4. **Prune**: drop byproducts with ttl 0.
pub fn advance(
    population: &mut Population,
    config:     &SimConfig,
    rng:        &mut SimRng,
    tick:       Tick,
) -> StepReport {
    integrate(population.as_mut_slice(), config.bounds(), config.dt());

    let contacts = find_contacts(population.as_slice(), config.broad_phase);
    let resolution = resolve_contacts(population, &contacts, config, rng);

    let expired = prune_expired(population);

    if !resolution.reactions.is_empty() {
        debug!(
            "{tick}: {} reactions, {} bounces, {} byproducts expired, {} particles",
            resolution.reactions.len(),
            resolution.bounces,
            expired,
            population.len()
        );
    }

    StepReport {
        tick,
        reactions: resolution.reactions,
        bounces:   resolution.bounces,
        contacts:  contacts.len(),
        expired,
    }
}
