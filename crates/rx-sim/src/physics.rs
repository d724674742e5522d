//! Motion: linear integration, wall reflection, and the pairwise bounce.

use rx_core::{Bounds, Vec2};
use rx_particle::Particle;

/// Substituted for `dist²` when two centres coincide exactly.  The normal
/// then collapses to zero and the bounce transfers nothing.
pub const COINCIDENT_EPSILON: f32 = 1e-6;

/// Advance every particle by `dt`, reflect off the walls, and age its
/// counters.  Touches each particle once; order-insensitive.
pub fn integrate(particles: &mut [Particle], bounds: Bounds, dt: f32) {
    for p in particles {
        p.pos += p.vel * dt;
        let r = p.radius();
        p.vel.x = reflect(p.pos.x, p.vel.x, r, bounds.width);
        p.vel.y = reflect(p.pos.y, p.vel.y, r, bounds.height);
        p.age();
    }
}

/// Velocity component after the wall check on one axis.
///
/// Outside `[r, extent − r]` the component is pointed back toward the
/// interior.  Position is left alone; the next integration carries the
/// particle back in.
#[inline]
pub fn reflect(x: f32, v: f32, r: f32, extent: f32) -> f32 {
    if x < r {
        v.abs()
    } else if x > extent - r {
        -v.abs()
    } else {
        v
    }
}

/// Unit-mass normal-impulse exchange between two overlapping particles.
///
/// The relative velocity is projected onto the line of centres and that
/// component is moved from `a` to `b`.  There is no mass term and no
/// approach test: the exchange happens whenever the pair overlaps.
pub fn bounce(a: &mut Particle, b: &mut Particle) {
    let delta = a.pos - b.pos;
    let mut d2 = delta.length_squared();
    if d2 == 0.0 {
        d2 = COINCIDENT_EPSILON;
    }
    let normal: Vec2 = delta / d2.sqrt();
    let p = (a.vel - b.vel).dot(normal);
    a.vel -= p * normal;
    b.vel += p * normal;
}
