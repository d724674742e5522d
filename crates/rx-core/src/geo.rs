//! Planar geometry for the flask.
//!
//! Positions and velocities are `glam::Vec2` (single precision).  The flask
//! is an axis-aligned box `[0, width] × [0, height]`; a disc of radius `r`
//! is inside when its centre lies in `[r, width − r] × [r, height − r]`.

pub use glam::Vec2;

/// The fixed rectangular extent of the simulated world.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub width:  f32,
    pub height: f32,
}

impl Bounds {
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// `true` when a disc of radius `r` centred at `pos` lies fully inside.
    #[inline]
    pub fn contains(self, pos: Vec2, r: f32) -> bool {
        self.contains_within(pos, r, 0.0)
    }

    /// Like [`contains`](Self::contains) but lets the disc poke out by up to
    /// `slack` units on any side.
    #[inline]
    pub fn contains_within(self, pos: Vec2, r: f32, slack: f32) -> bool {
        pos.x >= r - slack
            && pos.x <= self.width - r + slack
            && pos.y >= r - slack
            && pos.y <= self.height - r + slack
    }

    /// The `(min, max)` corners of the region left after insetting every
    /// wall by `margin`, or `None` if nothing remains.
    pub fn inset(self, margin: f32) -> Option<(Vec2, Vec2)> {
        let min = Vec2::splat(margin);
        let max = Vec2::new(self.width - margin, self.height - margin);
        (max.x > min.x && max.y > min.y).then_some((min, max))
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}×{}", self.width, self.height)
    }
}
