use serde::{Deserialize, Serialize};

use super::point::Point;
use super::shape::Shape;
use super::{on_segment, orientation, segments_intersect};

/// An ordered vertex sequence with clockwise winding (screen coordinates).
///
/// Vertices are stored as a flattened `x0,y0,x1,y1,…` buffer so that
/// position changes mutate in place without reallocation; the buffer is
/// only reallocated when the vertex count itself changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<f32>,
}

impl Polygon {
    /// Build a polygon from at least three vertices in clockwise order.
    ///
    /// # Panics
    ///
    /// Panics when fewer than three vertices are supplied; a two-point
    /// shape is a [`LineSegment`](super::linesegment::LineSegment), not a
    /// polygon.
    pub fn new(points: &[Point]) -> Self {
        assert!(
            points.len() >= 3,
            "a polygon requires at least 3 vertices, got {}",
            points.len()
        );
        let mut vertices = Vec::with_capacity(points.len() * 2);
        for point in points {
            vertices.push(point.x);
            vertices.push(point.y);
        }
        Polygon { vertices }
    }

    /// The flattened `x0,y0,x1,y1,…` coordinate buffer.
    ///
    /// Callers must treat the slice as read-only and mutate the polygon
    /// only through its operations.
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    pub fn number_of_sides(&self) -> usize {
        self.vertices.len() / 2
    }

    fn vertex(&self, index: usize) -> (f32, f32) {
        (self.vertices[index * 2], self.vertices[index * 2 + 1])
    }

    /// Strict-interior point containment via crossing-number ray casting.
    ///
    /// Points exactly on an edge are outside, so two polygons sharing an
    /// edge never both contain a point on it.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        !self.on_boundary(x, y) && self.crossing_test(x, y)
    }

    pub fn contains_point(&self, point: &Point) -> bool {
        self.contains(point.x, point.y)
    }

    /// Interior-or-boundary containment, used for shape-in-shape tests
    /// where touching edges still count as contained.
    pub(crate) fn contains_or_touches(&self, x: f32, y: f32) -> bool {
        self.on_boundary(x, y) || self.crossing_test(x, y)
    }

    /// Whether this polygon contains `other` entirely.
    ///
    /// Every vertex of `other` must be inside or on the boundary. Exact
    /// for convex polygons (all shapes in this family are convex).
    pub fn contains_polygon(&self, other: &Polygon) -> bool {
        (0..other.number_of_sides()).all(|i| {
            let (x, y) = other.vertex(i);
            self.contains_or_touches(x, y)
        })
    }

    /// Whether this polygon and `other` intersect: any edge pair crosses
    /// (collinear overlap included) or one polygon has a vertex strictly
    /// inside the other.
    pub fn intersects(&self, other: &Polygon) -> bool {
        let n = self.number_of_sides();
        let m = other.number_of_sides();
        for i in 0..n {
            let (a1x, a1y) = self.vertex(i);
            let (a2x, a2y) = self.vertex((i + 1) % n);
            for j in 0..m {
                let (b1x, b1y) = other.vertex(j);
                let (b2x, b2y) = other.vertex((j + 1) % m);
                if segments_intersect(a1x, a1y, a2x, a2y, b1x, b1y, b2x, b2y) {
                    return true;
                }
            }
        }
        // No edges cross: either disjoint or one fully inside the other.
        let (sx, sy) = self.vertex(0);
        let (ox, oy) = other.vertex(0);
        self.contains(ox, oy) || other.contains(sx, sy)
    }

    /// Whether the segment from `point_a` to `point_b` intersects this
    /// polygon, including segments lying entirely inside it.
    pub fn intersects_line_segment(&self, point_a: &Point, point_b: &Point) -> bool {
        let n = self.number_of_sides();
        for i in 0..n {
            let (e1x, e1y) = self.vertex(i);
            let (e2x, e2y) = self.vertex((i + 1) % n);
            if segments_intersect(
                e1x, e1y, e2x, e2y, point_a.x, point_a.y, point_b.x, point_b.y,
            ) {
                return true;
            }
        }
        self.contains(point_a.x, point_a.y) || self.contains(point_b.x, point_b.y)
    }

    /// Shift every vertex by a constant offset, in place.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        for pair in self.vertices.chunks_exact_mut(2) {
            pair[0] += dx;
            pair[1] += dy;
        }
    }

    /// Rotate every vertex about the centroid by `degrees` (clockwise on
    /// screen), in place.
    pub fn rotate(&mut self, degrees: f32) {
        let (cx, cy) = self.centroid();
        self.rotate_around(cx, cy, degrees);
    }

    /// Rotate every vertex about `(cx, cy)` by `degrees`, in place.
    pub fn rotate_around(&mut self, cx: f32, cy: f32, degrees: f32) {
        let (sin, cos) = degrees.to_radians().sin_cos();
        for pair in self.vertices.chunks_exact_mut(2) {
            let dx = pair[0] - cx;
            let dy = pair[1] - cy;
            pair[0] = cx + dx * cos - dy * sin;
            pair[1] = cy + dx * sin + dy * cos;
        }
    }

    /// Vertex-average centroid.
    pub fn centroid(&self) -> (f32, f32) {
        let n = self.number_of_sides() as f32;
        let mut cx = 0.0;
        let mut cy = 0.0;
        for pair in self.vertices.chunks_exact(2) {
            cx += pair[0];
            cy += pair[1];
        }
        (cx / n, cy / n)
    }

    pub fn min_x(&self) -> f32 {
        self.fold_coords(0, f32::min)
    }

    pub fn min_y(&self) -> f32 {
        self.fold_coords(1, f32::min)
    }

    pub fn max_x(&self) -> f32 {
        self.fold_coords(0, f32::max)
    }

    pub fn max_y(&self) -> f32 {
        self.fold_coords(1, f32::max)
    }

    fn fold_coords(&self, offset: usize, f: fn(f32, f32) -> f32) -> f32 {
        self.vertices
            .iter()
            .skip(offset)
            .step_by(2)
            .copied()
            .reduce(f)
            .unwrap_or(0.0)
    }

    fn on_boundary(&self, x: f32, y: f32) -> bool {
        let n = self.number_of_sides();
        (0..n).any(|i| {
            let (e1x, e1y) = self.vertex(i);
            let (e2x, e2y) = self.vertex((i + 1) % n);
            orientation(e1x, e1y, e2x, e2y, x, y) == 0 && on_segment(e1x, e1y, x, y, e2x, e2y)
        })
    }

    fn crossing_test(&self, x: f32, y: f32) -> bool {
        let n = self.number_of_sides();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (xi, yi) = self.vertex(i);
            let (xj, yj) = self.vertex(j);
            if (yi > y) != (yj > y) {
                let t = (y - yi) / (yj - yi);
                if x < xi + t * (xj - xi) {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

impl Shape for Polygon {
    fn contains(&self, x: f32, y: f32) -> bool {
        Polygon::contains(self, x, y)
    }

    fn intersects_line_segment(&self, point_a: &Point, point_b: &Point) -> bool {
        Polygon::intersects_line_segment(self, point_a, point_b)
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        Polygon::translate(self, dx, dy);
    }

    fn rotate(&mut self, degrees: f32) {
        Polygon::rotate(self, degrees);
    }

    fn x(&self) -> f32 {
        self.vertices[0]
    }

    fn y(&self) -> f32 {
        self.vertices[1]
    }

    fn min_x(&self) -> f32 {
        Polygon::min_x(self)
    }

    fn min_y(&self) -> f32 {
        Polygon::min_y(self)
    }

    fn max_x(&self) -> f32 {
        Polygon::max_x(self)
    }

    fn max_y(&self) -> f32 {
        Polygon::max_y(self)
    }

    fn number_of_sides(&self) -> usize {
        Polygon::number_of_sides(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f32, y: f32, size: f32) -> Polygon {
        Polygon::new(&[
            Point::new(x, y),
            Point::new(x + size, y),
            Point::new(x + size, y + size),
            Point::new(x, y + size),
        ])
    }

    #[test]
    fn test_contains_is_strict_at_boundary() {
        let poly = square(0.0, 0.0, 50.0);
        assert!(poly.contains(5.0, 49.999));
        assert!(!poly.contains(5.0, 50.0));
        assert!(!poly.contains(0.0, 0.0));
        assert!(!poly.contains(50.0, 25.0));
    }

    #[test]
    fn test_contains_interior_and_exterior() {
        let poly = square(0.0, 0.0, 50.0);
        assert!(poly.contains(25.0, 25.0));
        assert!(!poly.contains(-1.0, 25.0));
        assert!(!poly.contains(25.0, 51.0));
    }

    #[test]
    fn test_adjacent_squares_exclude_shared_edge() {
        let left = square(0.0, 0.0, 10.0);
        let right = square(10.0, 0.0, 10.0);
        // A point on the shared edge belongs to neither.
        assert!(!left.contains(10.0, 5.0));
        assert!(!right.contains(10.0, 5.0));
    }

    #[test]
    fn test_contains_polygon_shared_corner() {
        let outer = square(0.0, 0.0, 50.0);
        let inner = square(0.0, 0.0, 25.0);
        assert!(outer.contains_polygon(&inner));
        assert!(!inner.contains_polygon(&outer));
    }

    #[test]
    fn test_intersects_overlap_and_disjoint() {
        let a = square(0.0, 0.0, 50.0);
        let b = square(25.0, 25.0, 50.0);
        let c = square(100.0, 100.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_intersects_fully_enclosed() {
        let outer = square(0.0, 0.0, 50.0);
        let inner = square(20.0, 20.0, 5.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_intersects_identical() {
        let a = square(0.0, 0.0, 32.0);
        let b = square(0.0, 0.0, 32.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_line_segment_through_inside_and_missing() {
        let poly = square(2.0, 2.0, 4.0);
        assert!(poly.intersects_line_segment(&Point::new(0.0, 0.0), &Point::new(10.0, 10.0)));
        assert!(!poly.intersects_line_segment(&Point::new(10.0, 2.0), &Point::new(10.0, 10.0)));
        // Entirely inside still intersects.
        assert!(poly.intersects_line_segment(&Point::new(3.0, 3.0), &Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_translate_moves_all_vertices() {
        let mut poly = square(0.0, 0.0, 10.0);
        poly.translate(5.0, -2.0);
        assert_eq!(poly.vertices()[0], 5.0);
        assert_eq!(poly.vertices()[1], -2.0);
        assert_eq!(poly.min_x(), 5.0);
        assert_eq!(poly.max_y(), 8.0);
    }

    #[test]
    fn test_rotate_about_centroid_keeps_centroid() {
        let mut poly = square(0.0, 0.0, 10.0);
        poly.rotate(45.0);
        let (cx, cy) = poly.centroid();
        assert!((cx - 5.0).abs() < 1e-4);
        assert!((cy - 5.0).abs() < 1e-4);
    }

    #[test]
    #[should_panic(expected = "at least 3 vertices")]
    fn test_degenerate_polygon_panics() {
        let _ = Polygon::new(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
    }
}
