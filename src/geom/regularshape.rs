use super::linesegment::LineSegment;
use super::point::Point;
use super::polygon::Polygon;
use super::shape::Shape;

/// A shape where all interior angles are equal, defined by a center, a
/// radius (center to corner distance) and the rotational symmetry between
/// consecutive corners.
///
/// Corner 0 sits directly above the center; corners increment clockwise.
/// Position changes translate the vertex buffer in place; radius changes
/// rebuild it (the expensive path).
#[derive(Clone, Debug, PartialEq)]
pub struct RegularShape {
    center: Point,
    radius: f32,
    total_sides: u32,
    rotation_symmetry: f32,
    polygon: Polygon,
}

impl RegularShape {
    /// # Panics
    ///
    /// Panics when `total_sides` is less than 3.
    pub fn new(
        center_x: f32,
        center_y: f32,
        radius: f32,
        total_sides: u32,
        rotation_symmetry: f32,
    ) -> Self {
        assert!(
            total_sides >= 3,
            "a regular shape requires at least 3 sides, got {total_sides}"
        );
        let center = Point::new(center_x, center_y);
        RegularShape {
            center,
            radius,
            total_sides,
            rotation_symmetry,
            polygon: Self::build_polygon(center, radius, total_sides, rotation_symmetry),
        }
    }

    fn build_polygon(
        center: Point,
        radius: f32,
        total_sides: u32,
        rotation_symmetry: f32,
    ) -> Polygon {
        let top = Point::new(center.x, center.y - radius);
        let mut points = Vec::with_capacity(total_sides as usize);
        points.push(top);
        for i in 1..total_sides {
            let mut corner = top;
            corner.rotate_around(center, rotation_symmetry * i as f32);
            points.push(corner);
        }
        Polygon::new(&points)
    }

    pub fn x(&self) -> f32 {
        self.center.x
    }

    pub fn y(&self) -> f32 {
        self.center.y
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// The corner X coordinate at `index` (0 = top corner, clockwise).
    pub fn corner_x(&self, index: usize) -> f32 {
        self.polygon.vertices()[index * 2]
    }

    /// The corner Y coordinate at `index` (0 = top corner, clockwise).
    pub fn corner_y(&self, index: usize) -> f32 {
        self.polygon.vertices()[index * 2 + 1]
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Move the center X coordinate, translating the vertex buffer in
    /// place. Setting the current value is a no-op.
    pub fn set_x(&mut self, center_x: f32) {
        if center_x == self.center.x {
            return;
        }
        self.polygon.translate(center_x - self.center.x, 0.0);
        self.center.x = center_x;
    }

    /// Move the center Y coordinate, translating the vertex buffer in
    /// place. Setting the current value is a no-op.
    pub fn set_y(&mut self, center_y: f32) {
        if center_y == self.center.y {
            return;
        }
        self.polygon.translate(0.0, center_y - self.center.y);
        self.center.y = center_y;
    }

    /// Set both center coordinates with a single translation. Faster than
    /// calling [`RegularShape::set_x`] and [`RegularShape::set_y`]
    /// separately.
    pub fn set(&mut self, center_x: f32, center_y: f32) {
        let dx = center_x - self.center.x;
        let dy = center_y - self.center.y;
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        self.polygon.translate(dx, dy);
        self.center.set(center_x, center_y);
    }

    /// Set the center-to-corner distance, rebuilding the vertex buffer.
    ///
    /// This reallocates; prefer the translate-based setters in per-frame
    /// code.
    pub fn set_radius(&mut self, radius: f32) {
        if radius == self.radius {
            return;
        }
        self.radius = radius;
        self.polygon =
            Self::build_polygon(self.center, radius, self.total_sides, self.rotation_symmetry);
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.polygon.contains(x, y)
    }

    pub fn contains_point(&self, point: &Point) -> bool {
        self.polygon.contains_point(point)
    }

    pub fn intersects_polygon(&self, polygon: &Polygon) -> bool {
        self.polygon.intersects(polygon)
    }

    pub fn intersects_segment(&self, segment: &LineSegment) -> bool {
        self.polygon
            .intersects_line_segment(&segment.point_a, &segment.point_b)
    }
}

impl Shape for RegularShape {
    fn contains(&self, x: f32, y: f32) -> bool {
        RegularShape::contains(self, x, y)
    }

    fn intersects_line_segment(&self, point_a: &Point, point_b: &Point) -> bool {
        self.polygon.intersects_line_segment(point_a, point_b)
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.set(self.center.x + dx, self.center.y + dy);
    }

    fn rotate(&mut self, degrees: f32) {
        self.polygon
            .rotate_around(self.center.x, self.center.y, degrees);
    }

    fn x(&self) -> f32 {
        self.center.x
    }

    fn y(&self) -> f32 {
        self.center.y
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
        self.total_sides as usize
    }
}

/// A six-sided [`RegularShape`] with 60 degrees of rotational symmetry.
#[derive(Clone, Debug, PartialEq)]
pub struct RegularHexagon {
    shape: RegularShape,
}

impl RegularHexagon {
    pub const ROTATION_SYMMETRY: f32 = 60.0;
    const TOTAL_SIDES: u32 = 6;

    pub fn new(center_x: f32, center_y: f32, radius: f32) -> Self {
        RegularHexagon {
            shape: RegularShape::new(
                center_x,
                center_y,
                radius,
                Self::TOTAL_SIDES,
                Self::ROTATION_SYMMETRY,
            ),
        }
    }

    pub fn shape(&self) -> &RegularShape {
        &self.shape
    }

    pub fn shape_mut(&mut self) -> &mut RegularShape {
        &mut self.shape
    }
}

impl Shape for RegularHexagon {
    fn contains(&self, x: f32, y: f32) -> bool {
        self.shape.contains(x, y)
    }

    fn intersects_line_segment(&self, point_a: &Point, point_b: &Point) -> bool {
        Shape::intersects_line_segment(&self.shape, point_a, point_b)
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        Shape::translate(&mut self.shape, dx, dy);
    }

    fn rotate(&mut self, degrees: f32) {
        Shape::rotate(&mut self.shape, degrees);
    }

    fn x(&self) -> f32 {
        self.shape.x()
    }

    fn y(&self) -> f32 {
        self.shape.y()
    }

    fn min_x(&self) -> f32 {
        Shape::min_x(&self.shape)
    }

    fn min_y(&self) -> f32 {
        Shape::min_y(&self.shape)
    }

    fn max_x(&self) -> f32 {
        Shape::max_x(&self.shape)
    }

    fn max_y(&self) -> f32 {
        Shape::max_y(&self.shape)
    }

    fn number_of_sides(&self) -> usize {
        6
    }
}
