//! 2D geometry primitives: headings, rotation, segment intersection,
//! and the arena bounds rectangle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rotate a vector counterclockwise by `deg` degrees.
pub fn rotate_deg(v: Vec2, deg: f32) -> Vec2 {
    Vec2::from_angle(deg.to_radians()).rotate(v)
}

/// Unit heading for a rotation in degrees. The base heading (0°) is +Y.
pub fn heading_from_deg(deg: f32) -> Vec2 {
    rotate_deg(Vec2::Y, deg)
}

/// Signed area of the triangle (a, b, c): positive for a left turn.
fn orientation(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).perp_dot(c - a)
}

/// Whether `p`, known collinear with segment (a, b), lies within its bounds.
fn on_segment(a: Vec2, b: Vec2, p: Vec2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Segment intersection test for (a1, a2) vs (b1, b2).
///
/// Collinear touching counts as an intersection: grazing contact between
/// two envelopes is a collision.
pub fn segments_intersect(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> bool {
    let d1 = orientation(b1, b2, a1);
    let d2 = orientation(b1, b2, a2);
    let d3 = orientation(a1, a2, b1);
    let d4 = orientation(a1, a2, b2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && on_segment(b1, b2, a1))
        || (d2 == 0.0 && on_segment(b1, b2, a2))
        || (d3 == 0.0 && on_segment(a1, a2, b1))
        || (d4 == 0.0 && on_segment(a1, a2, b2))
}

/// Axis-aligned arena rectangle. Owned by the engine; replaced wholesale
/// on window resize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Square bounds centered at the origin: -d..+d on both axes.
    pub fn from_half_extent(d: f32) -> Self {
        Self {
            min: Vec2::splat(-d),
            max: Vec2::splat(d),
        }
    }

    /// Bounds shrunk by `amount` on every side.
    pub fn inset(&self, amount: f32) -> Self {
        Self {
            min: self.min + Vec2::splat(amount),
            max: self.max - Vec2::splat(amount),
        }
    }

    /// Whether `p` lies within the bounds grown by `margin` on every side.
    pub fn contains_with_margin(&self, p: Vec2, margin: f32) -> bool {
        p.x >= self.min.x - margin
            && p.x <= self.max.x + margin
            && p.y >= self.min.y - margin
            && p.y <= self.max.y + margin
    }

    /// Clamp `p` to the bounds shrunk by `inset` on every side.
    pub fn clamp(&self, p: Vec2, inset: f32) -> Vec2 {
        p.clamp(self.min + Vec2::splat(inset), self.max - Vec2::splat(inset))
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::from_half_extent(crate::constants::ARENA_HALF_EXTENT)
    }
}
