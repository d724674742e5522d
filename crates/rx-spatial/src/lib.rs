//! `rx-spatial` — contact detection for the `rx` reaction-flask simulator.
//!
//! A **contact** is an unordered pair of particles whose discs overlap:
//!
//! ```text
//! dist²(a, b) < (r_a + r_b)²
//! ```
//!
//! Detection is a pure function of a particle slice.  It returns contacts as
//! `(i, j)` index pairs with `i < j`, sorted ascending, i.e. exactly the
//! order a nested `for i { for j in i+1.. }` scan would visit them.  The
//! resolution phase in `rx-sim` relies on that order for determinism.
//!
//! # Broad phases
//!
//! | [`BroadPhase`]  | Cost            | Notes                                    |
//! |-----------------|-----------------|------------------------------------------|
//! | `AllPairs`      | O(n²)           | No allocation beyond the result.         |
//! | `RTree`         | O(n log n) exp. | Bulk-loads an `rstar` tree each call.    |
//!
//! Both yield identical contact lists; the narrow-phase test is shared.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs detection on Rayon's thread pool.  Output order   |
//! |            | is unchanged.                                          |

pub mod contact;
pub mod rtree;


pub use contact::{Contact, all_pairs, overlaps};
pub use rtree::rtree_pairs;
pub use rx_core::BroadPhase;

use rx_particle::Particle;

/// Detect every overlapping pair in `particles` using `strategy`.
pub fn find_contacts(particles: &[Particle], strategy: BroadPhase) -> Vec<Contact> {
    match strategy {
        BroadPhase::AllPairs => all_pairs(particles),
        BroadPhase::RTree    => rtree_pairs(particles),
    }
}
