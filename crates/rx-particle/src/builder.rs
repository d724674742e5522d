//! Fluent builder for constructing a fresh [`Population`].
//!
//! # Usage
//!
//! ```rust
//! use rx_core::{SimConfig, SimRng};
//! use rx_particle::PopulationBuilder;
//!
//! let config = SimConfig::default();
//! let mut rng = SimRng::new(42);
//! let population = PopulationBuilder::new(10, 5)
//!     .build(&config, &mut rng)
//!     .unwrap();
//!
//! assert_eq!(population.len(), 15);
//! assert_eq!(population.summary().amines[0], 10);
//! ```

use log::debug;
use rx_core::{RxError, RxResult, SimConfig, SimRng};

use crate::{ParticleKind, Population};

/// Requested molecule counts for a reset.
///
/// Amines are created first (all unmethylated), then methyl halides; each
/// particle draws its position and then its velocity from the RNG, so a
/// given seed always lays out the same flask.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct PopulationBuilder {
    amines:         usize,
    methyl_halides: usize,
}

impl PopulationBuilder {
    pub fn new(amines: usize, methyl_halides: usize) -> Self {
        Self { amines, methyl_halides }
    }

    /// Use the counts stored on `config`.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.amine_count, config.methyl_halide_count)
    }

    /// Place every molecule uniformly inside the spawn margin with uniformly
    /// random velocity components.
    ///
    /// Fails with [`RxError::InvalidConfiguration`] if `config` is invalid or
    /// its spawn margin is narrower than an unmethylated amine, which would
    /// let a particle start outside the walls.
    pub fn build(self, config: &SimConfig, rng: &mut SimRng) -> RxResult<Population> {
        config.validate()?;
        if config.spawn_margin < ParticleKind::AMMONIA.radius() {
            return Err(RxError::InvalidConfiguration(format!(
                "spawn_margin {} is smaller than the amine radius {}",
                config.spawn_margin,
                ParticleKind::AMMONIA.radius()
            )));
        }
        let (min, max) = config
            .bounds()
            .inset(config.spawn_margin)
            .ok_or_else(|| RxError::InvalidConfiguration("spawn region is empty".into()))?;

        let mut population = Population::with_capacity(self.amines + self.methyl_halides);
        let kinds = std::iter::repeat_n(ParticleKind::AMMONIA, self.amines)
            .chain(std::iter::repeat_n(ParticleKind::MethylHalide, self.methyl_halides));
        for kind in kinds {
            let pos = rng.point_in(min, max);
            let vel = rng.velocity(config.max_speed);
            population.spawn(kind, pos, vel);
        }

        debug!(
            "built population: {} amines, {} methyl halides in {}",
            self.amines,
            self.methyl_halides,
            config.bounds()
        );
        Ok(population)
    }
}

/// Starting mixtures offered by the flask front-end.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Preset {
    /// 50 : 50.
    #[default]
    Balanced,
    /// 160 amines : 20 methyl halides; mostly mono-methylation.
    ExcessAmine,
    /// 20 amines : 160 methyl halides; drives amines to quaternary.
    ExcessHalide,
}

impl Preset {
    pub fn counts(self) -> (usize, usize) {
        match self {
            Preset::Balanced     => (50, 50),
            Preset::ExcessAmine  => (160, 20),
            Preset::ExcessHalide => (20, 160),
        }
    }

    pub fn builder(self) -> PopulationBuilder {
        let (amines, halides) = self.counts();
        PopulationBuilder::new(amines, halides)
    }
}
