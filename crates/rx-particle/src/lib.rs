//! `rx-particle` — particle kinds and population storage for the `rx`
//! reaction-flask simulator.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`particle`]    | `Particle`, `ParticleKind` (per-species state + radii)    |
//! | [`store`]       | `Population` (id-ordered particle storage)                |
//! | [`builder`]     | `PopulationBuilder`, `Preset` (construction / reset)      |
//! | [`summary`]     | `PopulationSummary` (per-bucket counts)                   |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on all public types.     |

pub mod builder;
pub mod particle;
pub mod store;
pub mod summary;


pub use builder::{PopulationBuilder, Preset};
pub use particle::{Particle, ParticleKind};
pub use store::Population;
pub use summary::PopulationSummary;
