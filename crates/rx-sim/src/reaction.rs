//! Contact resolution: methylation or bounce, with deferred removal.
//!
//! # Resolution rules
//!
//! Contacts arrive in ascending `(i, j)` order and are applied one at a time:
//!
//! 1. If either particle was consumed earlier in this pass, skip the pair.
//! 2. If one side is a methylatable amine that has not yet reacted this step
//!    and the other is a methyl halide: methylate the amine, mark the halide
//!    consumed, and queue one hydrogen-chloride byproduct at the amine's
//!    position.  No bounce.
//! 3. Otherwise bounce.
//!
//! Consumed particles stay in place (marked, not removed) until the whole
//! pass is done, so indices never shift under the scan.  Afterwards they are
//! compacted out in one go and the queued byproducts are appended.

use log::trace;
use rx_core::{ParticleId, SimConfig, SimRng, Vec2};
use rx_particle::{Particle, ParticleKind, Population};
use rx_spatial::Contact;

use crate::physics::bounce;

/// One completed methylation.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReactionEvent {
    pub amine:        ParticleId,
    pub halide:       ParticleId,
    pub byproduct:    ParticleId,
    /// Methyl count of the amine after the reaction.
    pub methyl_count: u8,
    /// Where the byproduct was released.
    pub pos:          Vec2,
}

/// What the resolution pass did.
#[derive(Clone, Debug, Default)]
pub struct Resolution {
    pub reactions: Vec<ReactionEvent>,
    pub bounces:   usize,
}

/// Index of the amine and the halide if this pair can react, amine first.
#[inline]
fn reactive_pair(particles: &[Particle], c: Contact) -> Option<(usize, usize)> {
    let (a, b) = (&particles[c.i], &particles[c.j]);
    if a.can_methylate() && b.kind == ParticleKind::MethylHalide {
        Some((c.i, c.j))
    } else if b.can_methylate() && a.kind == ParticleKind::MethylHalide {
        Some((c.j, c.i))
    } else {
        None
    }
}

/// Apply `contacts` (detected on `population` as it stands now) and return
/// what happened.  Byproduct velocities are drawn from `rng` in reaction
/// order.
pub fn resolve_contacts(
    population: &mut Population,
    contacts:   &[Contact],
    config:     &SimConfig,
    rng:        &mut SimRng,
) -> Resolution {
    let n = population.len();
    let mut consumed = vec![false; n];
    let mut reacted  = vec![false; n];
    let mut births: Vec<Vec2> = Vec::new();
    let mut resolution = Resolution::default();

    let particles = population.as_mut_slice();
    for &contact in contacts {
        let Contact { i, j } = contact;
        if consumed[i] || consumed[j] {
            continue;
        }

        match reactive_pair(particles, contact) {
            Some((amine, halide)) if !reacted[amine] => {
                let methyl_count = particles[amine]
                    .methylate(config.flash_frames)
                    .unwrap_or(ParticleKind::MAX_METHYL);
                consumed[halide] = true;
                reacted[amine] = true;

                let pos = particles[amine].pos;
                births.push(rng.velocity(config.max_speed));
                resolution.reactions.push(ReactionEvent {
                    amine: particles[amine].id,
                    halide: particles[halide].id,
                    byproduct: ParticleId::INVALID,
                    methyl_count,
                    pos,
                });
                trace!(
                    "{} methylated by {} → {} methyl groups",
                    particles[amine].id, particles[halide].id, methyl_count
                );
            }
            _ => {
                let (head, tail) = particles.split_at_mut(j);
                bounce(&mut head[i], &mut tail[0]);
                resolution.bounces += 1;
            }
        }
    }

    if resolution.reactions.is_empty() {
        return resolution;
    }

    population.compact(&consumed);

    // The birth frame counts against the byproduct's lifetime.
    let ttl = config.hcl_lifetime_ticks().saturating_sub(1);
    for (event, vel) in resolution.reactions.iter_mut().zip(births) {
        event.byproduct = population.spawn(ParticleKind::HydrogenChloride { ttl }, event.pos, vel);
    }
    resolution
}

/// Remove byproducts whose lifetime has run out.  Returns how many.
pub fn prune_expired(population: &mut Population) -> usize {
    population.retain(|p| !p.is_expired())
}
