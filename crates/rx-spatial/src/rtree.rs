//! R-tree broad phase.
//!
//! Each particle is loaded as a point.  Particle `i` can only overlap a
//! particle whose centre lies within `r_i + r_max`, so that distance bounds
//! the neighbourhood query; the shared [`overlaps`] test then filters the
//! candidates exactly as the all-pairs scan would.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rx_core::Vec2;
use rx_particle::Particle;

use crate::contact::{Contact, overlaps};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// A particle centre plus its index in the detected slice.
#[derive(Clone)]
struct ParticleEntry {
    point: [f32; 2],
    index: usize,
}

impl RTreeObject for ParticleEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for ParticleEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        (Vec2::from(self.point) - Vec2::from(*point)).length_squared()
    }
}

// ── Query ─────────────────────────────────────────────────────────────────────

/// Contacts of particle `i` with higher-indexed particles, ascending `j`.
fn neighbours_after(
    tree:      &RTree<ParticleEntry>,
    particles: &[Particle],
    max_reach: f32,
    i:         usize,
) -> Vec<Contact> {
    let a = &particles[i];
    let query = a.radius() + max_reach;
    let mut found: Vec<Contact> = tree
        .locate_within_distance(a.pos.to_array(), query * query)
        .filter(|e| e.index > i && overlaps(a, &particles[e.index]))
        .map(|e| Contact { i, j: e.index })
        .collect();
    found.sort_unstable();
    found
}

/// Detect contacts through a freshly bulk-loaded R-tree.
pub fn rtree_pairs(particles: &[Particle]) -> Vec<Contact> {
    if particles.len() < 2 {
        return Vec::new();
    }

    let entries: Vec<ParticleEntry> = particles
        .iter()
        .enumerate()
        .map(|(index, p)| ParticleEntry { point: p.pos.to_array(), index })
        .collect();
    let tree = RTree::bulk_load(entries);
    let max_reach = particles
        .iter()
        .map(Particle::radius)
        .fold(0.0_f32, f32::max);

    #[cfg(not(feature = "parallel"))]
    {
        (0..particles.len())
            .flat_map(|i| neighbours_after(&tree, particles, max_reach, i))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        (0..particles.len())
            .into_par_iter()
            .flat_map_iter(|i| neighbours_after(&tree, particles, max_reach, i))
            .collect()
    }
}
