//! A single particle and its species-specific state.
//!
//! Radius is never stored: it is a pure function of the kind (an amine
//! grows by one unit per methyl group), so it can never drift out of sync
//! with `methyl_count`.

use rx_core::{ParticleId, Species, Vec2};

/// Species tag plus the state only that species carries.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParticleKind {
    /// NH₃ (0) through (CH₃)₄N⁺ (4).
    Amine { methyl_count: u8 },
    MethylHalide,
    /// Remaining frames before the byproduct is pruned.
    HydrogenChloride { ttl: u32 },
}

impl ParticleKind {
    pub const AMINE_BASE_RADIUS:    f32 = 8.0;
    pub const METHYL_HALIDE_RADIUS: f32 = 6.0;
    pub const HCL_RADIUS:           f32 = 3.0;
    /// Methyl groups at which an amine becomes the inert quaternary cation.
    pub const MAX_METHYL: u8 = 4;

    /// Unmethylated amine (ammonia).
    pub const AMMONIA: ParticleKind = ParticleKind::Amine { methyl_count: 0 };

    #[inline]
    pub fn species(self) -> Species {
        match self {
            ParticleKind::Amine { .. }            => Species::Amine,
            ParticleKind::MethylHalide            => Species::MethylHalide,
            ParticleKind::HydrogenChloride { .. } => Species::HydrogenChloride,
        }
    }

    #[inline]
    pub fn radius(self) -> f32 {
        match self {
            ParticleKind::Amine { methyl_count } => {
                Self::AMINE_BASE_RADIUS + methyl_count as f32
            }
            ParticleKind::MethylHalide            => Self::METHYL_HALIDE_RADIUS,
            ParticleKind::HydrogenChloride { .. } => Self::HCL_RADIUS,
        }
    }
}

/// One simulated molecule.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Particle {
    pub id:    ParticleId,
    pub kind:  ParticleKind,
    pub pos:   Vec2,
    /// Units per second.
    pub vel:   Vec2,
    /// Frames of highlighted rendering left.  Presentation only.
    pub flash: u32,
}

impl Particle {
    pub fn new(id: ParticleId, kind: ParticleKind, pos: Vec2, vel: Vec2) -> Self {
        Self { id, kind, pos, vel, flash: 0 }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.kind.radius()
    }

    #[inline]
    pub fn species(&self) -> Species {
        self.kind.species()
    }

    /// Methyl groups carried, or `None` for non-amines.
    #[inline]
    pub fn methyl_count(&self) -> Option<u8> {
        match self.kind {
            ParticleKind::Amine { methyl_count } => Some(methyl_count),
            _ => None,
        }
    }

    /// Remaining lifetime, or `None` for species that do not expire.
    #[inline]
    pub fn ttl(&self) -> Option<u32> {
        match self.kind {
            ParticleKind::HydrogenChloride { ttl } => Some(ttl),
            _ => None,
        }
    }

    /// `true` for an amine that can still accept a methyl group.
    #[inline]
    pub fn can_methylate(&self) -> bool {
        matches!(self.kind, ParticleKind::Amine { methyl_count } if methyl_count < ParticleKind::MAX_METHYL)
    }

    #[inline]
    pub fn is_quaternary(&self) -> bool {
        self.methyl_count() == Some(ParticleKind::MAX_METHYL)
    }

    /// `true` for a byproduct whose lifetime has run out.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.ttl() == Some(0)
    }

    /// Attach one methyl group and start the reaction highlight.
    ///
    /// Returns the new methyl count, or `None` (and leaves the particle
    /// untouched) if it is not a methylatable amine.
    pub fn methylate(&mut self, flash_frames: u32) -> Option<u8> {
        match &mut self.kind {
            ParticleKind::Amine { methyl_count } if *methyl_count < ParticleKind::MAX_METHYL => {
                *methyl_count += 1;
                self.flash = flash_frames;
                Some(*methyl_count)
            }
            _ => None,
        }
    }

    /// Count one frame against the byproduct lifetime and the highlight.
    /// Both counters saturate at zero.
    #[inline]
    pub fn age(&mut self) {
        if let ParticleKind::HydrogenChloride { ttl } = &mut self.kind {
            *ttl = ttl.saturating_sub(1);
        }
        self.flash = self.flash.saturating_sub(1);
    }
}
