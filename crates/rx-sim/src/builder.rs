//! Fluent builder for constructing a [`Sim`].

use log::debug;
use rx_core::{SimConfig, SimRng};
use rx_particle::{ParticleKind, Population, PopulationBuilder};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: world size, frame rate, seed, molecule counts, …
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                             |
/// |-------------------|-----------------------------------------------------|
/// | `.population(p)`  | Random flask from `config.amine_count` / `methyl_halide_count` |
/// | `.rng(r)`         | `SimRng::new(config.seed)`                          |
///
/// # Example
///
/// ```rust
/// use rx_core::SimConfig;
/// use rx_sim::{NoopObserver, SimBuilder};
///
/// let config = SimConfig { total_ticks: 120, seed: 7, ..SimConfig::default() };
/// let mut sim = SimBuilder::new(config).build().unwrap();
/// sim.run(&mut NoopObserver);
/// assert_eq!(sim.current_tick().0, 120);
/// ```
pub struct SimBuilder {
    config:     SimConfig,
    population: Option<Population>,
    rng:        Option<SimRng>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, population: None, rng: None }
    }

    /// Start from a hand-placed population instead of a random flask.
    ///
    /// Every particle must fit inside the world, have finite state, and (for
    /// amines) carry no more than four methyl groups.
    pub fn population(mut self, population: Population) -> Self {
        self.population = Some(population);
        self
    }

    /// Supply the RNG stream instead of seeding from `config.seed`.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate inputs, lay out the flask if needed, and return a ready
    /// [`Sim`] at tick 0.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let mut rng = self.rng.unwrap_or_else(|| SimRng::new(self.config.seed));

        let population = match self.population {
            Some(p) => {
                check_population(&p, &self.config)?;
                p
            }
            None => PopulationBuilder::from_config(&self.config).build(&self.config, &mut rng)?,
        };

        debug!(
            "sim ready: {} particles, seed {}, {:?} broad phase",
            population.len(),
            self.config.seed,
            self.config.broad_phase
        );

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            population,
            rng,
        })
    }
}

fn check_population(population: &Population, config: &SimConfig) -> SimResult<()> {
    let bounds = config.bounds();
    for p in population {
        if !(p.pos.is_finite() && p.vel.is_finite()) {
            return Err(SimError::NonFiniteState { id: p.id });
        }
        if let Some(m) = p.methyl_count().filter(|&m| m > ParticleKind::MAX_METHYL) {
            return Err(SimError::InvalidParticle {
                id:           p.id,
                methyl_count: m,
                max:          ParticleKind::MAX_METHYL,
            });
        }
        if !bounds.contains(p.pos, p.radius()) {
            return Err(SimError::ParticleOutOfBounds {
                id:     p.id,
                x:      p.pos.x,
                y:      p.pos.y,
                width:  bounds.width,
                height: bounds.height,
            });
        }
    }
    Ok(())
}
