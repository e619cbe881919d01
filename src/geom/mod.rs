//! Geometry primitives for collision shapes and spatial queries.
//!
//! This module groups the shape types used by the collision layer and the
//! spatial queries they share. All coordinates are screen-space floats
//! (y grows downward) and all rotations are degrees, clockwise-positive.
//!
//! Submodules overview:
//! - [`point`] – 2D coordinate with rotation-around-pivot support
//! - [`linesegment`] – two-point segment with intersection tests
//! - [`polygon`] – clockwise vertex buffer with containment/intersection
//! - [`rectangle`] – axis-aligned-then-rotatable box backed by a polygon
//! - [`regularshape`] – shapes with equal interior angles (hexagons etc.)
//! - [`shape`] – the common query contract over all of the above
//!
//! Containment is strict at boundaries: a point exactly on an edge is
//! outside. This keeps containment tests of adjacent shapes mutually
//! exclusive along their shared edge.

pub mod linesegment;
pub mod point;
pub mod polygon;
pub mod rectangle;
pub mod regularshape;
pub mod shape;

pub use linesegment::LineSegment;
pub use point::Point;
pub use polygon::Polygon;
pub use rectangle::Rectangle;
pub use regularshape::{RegularHexagon, RegularShape};
pub use shape::Shape;

/// Orientation of the ordered triplet (p, q, r):
/// 0 = collinear, 1 = clockwise, -1 = counter-clockwise.
pub(crate) fn orientation(px: f32, py: f32, qx: f32, qy: f32, rx: f32, ry: f32) -> i32 {
    let cross = (qy - py) * (rx - qx) - (qx - px) * (ry - qy);
    if cross == 0.0 {
        0
    } else if cross > 0.0 {
        1
    } else {
        -1
    }
}

/// Whether q lies within the bounding box of segment (p, r).
/// Only meaningful when the three points are collinear.
pub(crate) fn on_segment(px: f32, py: f32, qx: f32, qy: f32, rx: f32, ry: f32) -> bool {
    qx <= px.max(rx) && qx >= px.min(rx) && qy <= py.max(ry) && qy >= py.min(ry)
}

/// Segment intersection test over (a1, a2) and (b1, b2).
///
/// Collinear overlap counts as intersection, so segments sharing a stretch
/// of the same line (e.g. coincident rectangle edges) report true.
pub(crate) fn segments_intersect(
    a1x: f32,
    a1y: f32,
    a2x: f32,
    a2y: f32,
    b1x: f32,
    b1y: f32,
    b2x: f32,
    b2y: f32,
) -> bool {
    let o1 = orientation(a1x, a1y, a2x, a2y, b1x, b1y);
    let o2 = orientation(a1x, a1y, a2x, a2y, b2x, b2y);
    let o3 = orientation(b1x, b1y, b2x, b2y, a1x, a1y);
    let o4 = orientation(b1x, b1y, b2x, b2y, a2x, a2y);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == 0 && on_segment(a1x, a1y, b1x, b1y, a2x, a2y))
        || (o2 == 0 && on_segment(a1x, a1y, b2x, b2y, a2x, a2y))
        || (o3 == 0 && on_segment(b1x, b1y, a1x, a1y, b2x, b2y))
        || (o4 == 0 && on_segment(b1x, b1y, a2x, a2y, b2x, b2y))
}
