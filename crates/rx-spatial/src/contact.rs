//! Narrow-phase overlap test and the all-pairs broad phase.

use rx_particle::Particle;

/// Two overlapping particles, by index into the slice they were detected in.
/// Always `i < j`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Contact {
    pub i: usize,
    pub j: usize,
}

/// Squared-distance overlap test; strict, so touching discs do not collide.
#[inline]
pub fn overlaps(a: &Particle, b: &Particle) -> bool {
    let reach = a.radius() + b.radius();
    (a.pos - b.pos).length_squared() < reach * reach
}

/// All contacts of particle `i` with particles after it, ascending `j`.
#[inline]
pub(crate) fn contacts_after(particles: &[Particle], i: usize) -> impl Iterator<Item = Contact> + '_ {
    let a = &particles[i];
    particles[i + 1..]
        .iter()
        .enumerate()
        .filter(move |(_, b)| overlaps(a, b))
        .map(move |(k, _)| Contact { i, j: i + 1 + k })
}

/// Test every unordered pair.
pub fn all_pairs(particles: &[Particle]) -> Vec<Contact> {
    #[cfg(not(feature = "parallel"))]
    {
        (0..particles.len())
            .flat_map(|i| contacts_after(particles, i))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        // Rayon's ordered collect keeps the per-`i` groups in ascending order.
        (0..particles.len())
            .into_par_iter()
            .flat_map_iter(|i| contacts_after(particles, i))
            .collect()
    }
}
