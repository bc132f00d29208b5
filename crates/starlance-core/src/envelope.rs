//! Oriented bounding envelope: derivation from a pose and pairwise
//! edge-intersection testing.

use glam::Vec2;

use crate::geometry::segments_intersect;

/// Four corners of an entity's oriented bounding box, in winding order
/// lower-left, upper-left, upper-right, lower-right (model space).
pub type Envelope = [Vec2; 4];

/// Derive the envelope of a model-cell rectangle under a pose.
///
/// `direction` is the model's "up" axis in world space; the width axis is
/// its counterclockwise perpendicular. The pivot is expressed in model
/// cells and scaled along both axes, so `position` maps to the model
/// origin offset by the pivot.
pub fn oriented_envelope(
    position: Vec2,
    direction: Vec2,
    pivot: Vec2,
    scale: Vec2,
    cols: usize,
    rows: usize,
) -> Envelope {
    let right = direction.perp();
    let width = cols as f32 * scale.x;
    let height = rows as f32 * scale.y;

    let pivot_world = right * (pivot.x * scale.x) + direction * (pivot.y * scale.y);
    let origin = position - pivot_world;

    [
        origin,
        origin + direction * height,
        origin + direction * height + right * width,
        origin + right * width,
    ]
}

/// Whether any edge of `a` intersects any edge of `b` (16 segment tests,
/// edges enumerated mod 4). Symmetric in its arguments.
pub fn envelopes_intersect(a: &Envelope, b: &Envelope) -> bool {
    for i in 0..4 {
        let a1 = a[i];
        let a2 = a[(i + 1) % 4];
        for j in 0..4 {
            if segments_intersect(a1, a2, b[j], b[(j + 1) % 4]) {
                return true;
            }
        }
    }
    false
}
