//! `Population`: the particle collection owned by the simulation.
//!
//! # Ordering invariant
//!
//! Particles are stored in ascending `ParticleId` order.  Ids are allocated
//! monotonically by [`Population::spawn`], new particles are appended, and
//! [`Population::compact`] / [`Population::retain`] preserve relative order,
//! so the invariant holds without ever sorting.  It gives two things:
//!
//! - the index scan `(i, j), i < j` visits pairs in a deterministic order
//!   that depends only on creation history;
//! - [`Population::get`] can binary-search by id.

use rx_core::{ParticleId, Species, Vec2};

use crate::{Particle, ParticleKind, PopulationSummary};

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    particles: Vec<Particle>,
    next_id:   ParticleId,
}

impl Population {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
            next_id:   ParticleId(0),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Read-only view in id order.
    #[inline]
    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    /// Mutable view for the step phases.  Cannot add or remove particles, so
    /// the id-ordering invariant is preserved.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Append a new particle and return its freshly allocated id.
    pub fn spawn(&mut self, kind: ParticleKind, pos: Vec2, vel: Vec2) -> ParticleId {
        let id = self.next_id;
        self.next_id = id.next();
        self.particles.push(Particle::new(id, kind, pos, vel));
        id
    }

    /// Look up a particle by id.  O(log n).
    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.particles
            .binary_search_by_key(&id, |p| p.id)
            .ok()
            .map(|i| &self.particles[i])
    }

    /// Drop every particle whose slot in `removed` is `true`, keeping the
    /// survivors in order.
    ///
    /// # Panics
    /// Panics if `removed.len() != self.len()`.
    pub fn compact(&mut self, removed: &[bool]) {
        assert_eq!(removed.len(), self.particles.len(), "removal mask length mismatch");
        let mut slot = 0;
        self.particles.retain(|_| {
            let keep = !removed[slot];
            slot += 1;
            keep
        });
    }

    /// Keep only the particles for which `keep` returns `true`.
    /// Returns how many were dropped.
    pub fn retain<F: FnMut(&Particle) -> bool>(&mut self, keep: F) -> usize {
        let before = self.particles.len();
        self.particles.retain(keep);
        before - self.particles.len()
    }

    /// Number of particles of `species`.
    pub fn count(&self, species: Species) -> usize {
        self.particles.iter().filter(|p| p.species() == species).count()
    }

    /// Per-bucket counts.  Pure; O(n).
    pub fn summary(&self) -> PopulationSummary {
        let mut summary = PopulationSummary::default();
        for p in &self.particles {
            match p.kind {
                ParticleKind::Amine { methyl_count } => {
                    summary.amines[methyl_count as usize] += 1;
                }
                ParticleKind::MethylHalide => summary.methyl_halides += 1,
                ParticleKind::HydrogenChloride { .. } => summary.hydrogen_chloride += 1,
            }
        }
        summary
    }
}

impl Default for Population {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}
