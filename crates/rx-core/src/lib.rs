//! `rx-core` — foundational types for the `rx` reaction-flask simulator.
//!
//! This crate is a dependency of every other `rx-*` crate.  It intentionally
//! has no `rx-*` dependencies and minimal external ones (`glam`, `rand`, and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ParticleId`                                          |
//! | [`geo`]         | `Bounds`, re-exported `glam::Vec2`                    |
//! | [`species`]     | `Species` enum                                        |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`, `BroadPhase`         |
//! | [`rng`]         | `SimRng` (seedable, single stream per simulation)     |
//! | [`error`]       | `RxError`, `RxResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load `SimConfig` from JSON.                    |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod species;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RxError, RxResult};
pub use geo::{Bounds, Vec2};
pub use ids::ParticleId;
pub use rng::SimRng;
pub use species::Species;
pub use time::{BroadPhase, SimClock, SimConfig, Tick};
