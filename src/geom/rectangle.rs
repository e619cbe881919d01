use super::linesegment::LineSegment;
use super::point::Point;
use super::polygon::Polygon;
use super::shape::Shape;

/// An axis-aligned-then-rotatable box backed by an owned [`Polygon`].
///
/// `(x, y)` is the anchor corner (top-left before rotation), `rotation`
/// accumulates in degrees about the box center. Once rotated, the box is a
/// general quadrilateral for query purposes, not an AABB.
///
/// Position changes translate the polygon in place; size changes rebuild
/// it, preserving the anchor corner and reapplying the current rotation.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    rotation: f32,
    polygon: Polygon,
}

impl Default for Rectangle {
    fn default() -> Self {
        Rectangle::new(0.0, 0.0, 1.0, 1.0)
    }
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rectangle {
            x,
            y,
            width,
            height,
            rotation: 0.0,
            polygon: Self::build_polygon(x, y, width, height, 0.0),
        }
    }

    fn build_polygon(x: f32, y: f32, width: f32, height: f32, rotation: f32) -> Polygon {
        let mut polygon = Polygon::new(&[
            Point::new(x, y),
            Point::new(x + width, y),
            Point::new(x + width, y + height),
            Point::new(x, y + height),
        ]);
        if rotation != 0.0 {
            polygon.rotate_around(x + width * 0.5, y + height * 0.5, rotation);
        }
        polygon
    }

    fn rebuild(&mut self) {
        self.polygon = Self::build_polygon(self.x, self.y, self.width, self.height, self.rotation);
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width * 0.5
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height * 0.5
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// The backing polygon's flattened vertex buffer (read-only contract).
    pub fn vertices(&self) -> &[f32] {
        self.polygon.vertices()
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Move the anchor X coordinate, translating the polygon in place.
    /// Setting the current value is a no-op.
    pub fn set_x(&mut self, x: f32) {
        if x == self.x {
            return;
        }
        self.polygon.translate(x - self.x, 0.0);
        self.x = x;
    }

    /// Move the anchor Y coordinate, translating the polygon in place.
    /// Setting the current value is a no-op.
    pub fn set_y(&mut self, y: f32) {
        if y == self.y {
            return;
        }
        self.polygon.translate(0.0, y - self.y);
        self.y = y;
    }

    /// Resize, preserving the anchor corner. Setting the current value is
    /// a no-op; otherwise the polygon is rebuilt and the current rotation
    /// reapplied about the new center.
    pub fn set_width(&mut self, width: f32) {
        if width == self.width {
            return;
        }
        self.width = width;
        self.rebuild();
    }

    /// See [`Rectangle::set_width`].
    pub fn set_height(&mut self, height: f32) {
        if height == self.height {
            return;
        }
        self.height = height;
        self.rebuild();
    }

    /// Combined position + size update. Translates in place when only the
    /// position changed, rebuilds once when the size changed.
    pub fn set(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let resized = width != self.width || height != self.height;
        if resized {
            self.x = x;
            self.y = y;
            self.width = width;
            self.height = height;
            self.rebuild();
            return;
        }
        let dx = x - self.x;
        let dy = y - self.y;
        if dx != 0.0 || dy != 0.0 {
            self.polygon.translate(dx, dy);
            self.x = x;
            self.y = y;
        }
    }

    /// Rotate about the box center by `degrees`; rotation accumulates.
    pub fn rotate(&mut self, degrees: f32) {
        if degrees == 0.0 {
            return;
        }
        self.polygon
            .rotate_around(self.center_x(), self.center_y(), degrees);
        self.rotation += degrees;
    }

    /// Set the absolute rotation about the box center.
    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotate(degrees - self.rotation);
    }

    /// Strict-interior containment; correct under rotation.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.polygon.contains(x, y)
    }

    pub fn contains_point(&self, point: &Point) -> bool {
        self.contains(point.x, point.y)
    }

    /// Whether `other` lies entirely inside this box. Touching edges still
    /// count as contained, unlike point containment.
    pub fn contains_rectangle(&self, other: &Rectangle) -> bool {
        self.polygon.contains_polygon(&other.polygon)
    }

    /// Box-vs-box intersection with an axis-aligned fast path when neither
    /// box is rotated.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        if self.rotation == 0.0 && other.rotation == 0.0 {
            return self.x < other.max_x()
                && self.max_x() > other.x
                && self.y < other.max_y()
                && self.max_y() > other.y;
        }
        self.polygon.intersects(&other.polygon)
    }

    pub fn intersects_polygon(&self, polygon: &Polygon) -> bool {
        self.polygon.intersects(polygon)
    }

    pub fn intersects_line_segment(&self, point_a: &Point, point_b: &Point) -> bool {
        self.polygon.intersects_line_segment(point_a, point_b)
    }

    pub fn intersects_segment(&self, segment: &LineSegment) -> bool {
        self.intersects_line_segment(&segment.point_a, &segment.point_b)
    }

    /// Shift the box by a constant offset, translating in place.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        self.polygon.translate(dx, dy);
        self.x += dx;
        self.y += dy;
    }
}

impl Shape for Rectangle {
    fn contains(&self, x: f32, y: f32) -> bool {
        Rectangle::contains(self, x, y)
    }

    fn intersects_line_segment(&self, point_a: &Point, point_b: &Point) -> bool {
        Rectangle::intersects_line_segment(self, point_a, point_b)
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        Rectangle::translate(self, dx, dy);
    }

    fn rotate(&mut self, degrees: f32) {
        Rectangle::rotate(self, degrees);
    }

    fn x(&self) -> f32 {
        self.x
    }

    fn y(&self) -> f32 {
        self.y
    }

    fn min_x(&self) -> f32 {
        self.polygon.min_x()
    }

    fn min_y(&self) -> f32 {
        self.polygon.min_y()
    }

    fn max_x(&self) -> f32 {
        self.polygon.max_x()
    }

    fn max_y(&self) -> f32 {
        self.polygon.max_y()
    }

    fn number_of_sides(&self) -> usize {
        4
    }
}
