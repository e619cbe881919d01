use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

/// A 2D coordinate in screen space (y grows downward).
///
/// Equality is value equality on `(x, y)`. Inputs are unconstrained floats;
/// NaN and infinity propagate per IEEE rules, no validation happens here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }

    /// Set both coordinates at once.
    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Rotate this point in place about `pivot` by `degrees`.
    ///
    /// Positive angles rotate clockwise on screen (y-down coordinates).
    /// The transform is a plain rotation-matrix application, so distances
    /// to the pivot are preserved.
    pub fn rotate_around(&mut self, pivot: Point, degrees: f32) {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        self.x = pivot.x + dx * cos - dy * sin;
        self.y = pivot.y + dx * sin + dy * cos;
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Component-wise scaling, used when treating the point as a vector.
    pub fn scale_by(self, factor: f32) -> Point {
        Point {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_rotate_around_quarter_turn() {
        let mut p = Point::new(10.0, 0.0);
        p.rotate_around(Point::new(0.0, 0.0), 90.0);
        assert!(approx_eq(p.x, 0.0));
        assert!(approx_eq(p.y, 10.0));
    }

    #[test]
    fn test_rotate_around_preserves_distance() {
        let pivot = Point::new(3.0, -7.0);
        let mut p = Point::new(20.0, 14.0);
        let before = p.distance_to(pivot);
        p.rotate_around(pivot, 38.5);
        assert!(approx_eq(p.distance_to(pivot), before));
    }

    #[test]
    fn test_rotate_around_full_turn_is_identity() {
        let mut p = Point::new(5.0, 5.0);
        p.rotate_around(Point::new(1.0, 2.0), 360.0);
        assert!(approx_eq(p.x, 5.0));
        assert!(approx_eq(p.y, 5.0));
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Point::new(1.5, -2.0), Point::new(1.5, -2.0));
        assert_ne!(Point::new(1.5, -2.0), Point::new(1.5, 2.0));
    }
}
