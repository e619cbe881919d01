use serde::{Deserialize, Serialize};

use super::point::Point;
use super::shape::Shape;
use super::{on_segment, orientation, segments_intersect};

/// A line segment between two points.
///
/// The degenerate two-point shape of the family: it has no interior, so
/// `contains` means "lies on the segment".
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub point_a: Point,
    pub point_b: Point,
}

impl LineSegment {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        LineSegment {
            point_a: Point::new(x1, y1),
            point_b: Point::new(x2, y2),
        }
    }

    pub fn from_points(point_a: Point, point_b: Point) -> Self {
        LineSegment { point_a, point_b }
    }

    pub fn set_point_a(&mut self, point: Point) {
        self.point_a = point;
    }

    pub fn set_point_b(&mut self, point: Point) {
        self.point_b = point;
    }

    pub fn length(&self) -> f32 {
        self.point_a.distance_to(self.point_b)
    }

    /// Whether `(x, y)` lies on the segment (collinear and within bounds).
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let a = self.point_a;
        let b = self.point_b;
        orientation(a.x, a.y, b.x, b.y, x, y) == 0 && on_segment(a.x, a.y, x, y, b.x, b.y)
    }

    /// Whether this segment intersects another.
    ///
    /// Collinear overlap counts as intersection.
    pub fn intersects(&self, other: &LineSegment) -> bool {
        segments_intersect(
            self.point_a.x,
            self.point_a.y,
            self.point_b.x,
            self.point_b.y,
            other.point_a.x,
            other.point_a.y,
            other.point_b.x,
            other.point_b.y,
        )
    }

    fn midpoint(&self) -> Point {
        Point::new(
            (self.point_a.x + self.point_b.x) * 0.5,
            (self.point_a.y + self.point_b.y) * 0.5,
        )
    }
}

impl Shape for LineSegment {
    fn contains(&self, x: f32, y: f32) -> bool {
        LineSegment::contains(self, x, y)
    }

    fn intersects_line_segment(&self, point_a: &Point, point_b: &Point) -> bool {
        self.intersects(&LineSegment::from_points(*point_a, *point_b))
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.point_a.x += dx;
        self.point_a.y += dy;
        self.point_b.x += dx;
        self.point_b.y += dy;
    }

    fn rotate(&mut self, degrees: f32) {
        let pivot = self.midpoint();
        self.point_a.rotate_around(pivot, degrees);
        self.point_b.rotate_around(pivot, degrees);
    }

    fn x(&self) -> f32 {
        self.point_a.x
    }

    fn y(&self) -> f32 {
        self.point_a.y
    }

    fn min_x(&self) -> f32 {
        self.point_a.x.min(self.point_b.x)
    }

    fn min_y(&self) -> f32 {
        self.point_a.y.min(self.point_b.y)
    }

    fn max_x(&self) -> f32 {
        self.point_a.x.max(self.point_b.x)
    }

    fn max_y(&self) -> f32 {
        self.point_a.y.max(self.point_b.y)
    }

    fn number_of_sides(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_on_and_off_segment() {
        let segment = LineSegment::new(0.0, 0.0, 10.0, 10.0);
        assert!(segment.contains(5.0, 5.0));
        assert!(segment.contains(0.0, 0.0));
        assert!(!segment.contains(5.0, 6.0));
        assert!(!segment.contains(11.0, 11.0));
    }

    #[test]
    fn test_crossing_segments_intersect() {
        let a = LineSegment::new(0.0, 0.0, 10.0, 10.0);
        let b = LineSegment::new(0.0, 10.0, 10.0, 0.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_parallel_segments_do_not_intersect() {
        let a = LineSegment::new(0.0, 0.0, 10.0, 0.0);
        let b = LineSegment::new(0.0, 1.0, 10.0, 1.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_collinear_overlap_intersects() {
        let a = LineSegment::new(0.0, 0.0, 10.0, 0.0);
        let b = LineSegment::new(5.0, 0.0, 15.0, 0.0);
        assert!(a.intersects(&b));

        let apart = LineSegment::new(11.0, 0.0, 15.0, 0.0);
        assert!(!a.intersects(&apart));
    }

    #[test]
    fn test_endpoint_touch_intersects() {
        let a = LineSegment::new(0.0, 0.0, 10.0, 0.0);
        let b = LineSegment::new(10.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&b));
    }
}
