//! `rx-sim` — step loop orchestrator for the `rx` reaction-flask simulator.
//!
//! # Four-phase step
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Integrate — x += v·Δt; reflect off walls; ttl −= 1 (HCl); flash −= 1.
//!   ② Detect    — overlapping pairs (i < j), ascending; optionally parallel.
//!   ③ Resolve   — amine + CH₃Cl → methylate, consume halide, queue HCl;
//!                 anything else → unit-mass normal bounce.
//!                 Consumed halides are compacted out after the pass;
//!                 queued HCl is appended.
//!   ④ Prune     — drop HCl with ttl 0.
//! ```
//!
//! Each particle reacts at most once per step.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the detection phase on Rayon's thread pool.       |
//! | `serde`    | Derives `Serialize`/`Deserialize` on reports.          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rx_core::SimConfig;
//! use rx_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig { total_ticks: 3_600, seed: 42, ..SimConfig::default() };
//! let mut sim = SimBuilder::new(config).build()?;
//! sim.run(&mut NoopObserver);
//! println!("{}", sim.summary());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod physics;
pub mod reaction;
pub mod sim;
pub mod step;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use reaction::ReactionEvent;
pub use sim::Sim;
pub use step::{StepReport, advance};
