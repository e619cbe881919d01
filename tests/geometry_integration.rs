//! Geometry Integration Tests
//!
//! Cross-type behavior of the shape family: boundary exclusivity between
//! neighbors, rotation-aware containment, intersection symmetry over
//! randomized scenes, regular shapes, and pool recycling semantics.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use planarengine::collision::{CollisionBox, Geometry, PositionChangeListener};
use planarengine::geom::{LineSegment, Point, Polygon, Rectangle, RegularHexagon, Shape};

#[derive(Default)]
struct PositionCounter(AtomicUsize);

impl PositionChangeListener for PositionCounter {
    fn position_changed(&self, _moved: &CollisionBox) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

#[test]
fn adjacent_boxes_never_share_a_boundary_point() {
    let left = Rectangle::new(0.0, 0.0, 20.0, 20.0);
    let right = Rectangle::new(20.0, 0.0, 20.0, 20.0);
    for step in 0..=20 {
        let y = step as f32;
        assert!(!left.contains(20.0, y));
        assert!(!right.contains(20.0, y));
    }
}

#[test]
fn rotation_flips_containment_near_corners() {
    let mut rect = Rectangle::new(0.0, 0.0, 50.0, 50.0);
    // Near the corner: inside while axis-aligned.
    assert!(rect.contains(2.0, 2.0));
    rect.rotate(45.0);
    // The rotated diamond no longer covers the old corner...
    assert!(!rect.contains(2.0, 2.0));
    // ...but now covers points above the old top edge, near the middle.
    assert!(rect.contains(25.0, -5.0));
}

#[test]
fn enclosure_and_overlap_properties() {
    let outer = CollisionBox::new(0.0, 0.0, 100.0, 100.0);
    let inner = CollisionBox::new(20.0, 20.0, 40.0, 40.0);
    assert!(outer.contains_box(&inner));
    assert!(!inner.contains_box(&outer));
    assert!(outer.intersects(&inner));

    let overlapping = CollisionBox::new(80.0, 80.0, 40.0, 40.0);
    assert!(!outer.contains_box(&overlapping));
    assert!(!overlapping.contains_box(&outer));
    assert!(outer.intersects(&overlapping));
    assert!(overlapping.intersects(&outer));
}

#[test]
fn intersection_is_symmetric_over_random_scenes() {
    let mut rng = fastrand::Rng::with_seed(7);
    let mut boxes = Vec::new();
    for _ in 0..40 {
        let mut collision_box = CollisionBox::new(
            rng.f32() * 200.0,
            rng.f32() * 200.0,
            1.0 + rng.f32() * 60.0,
            1.0 + rng.f32() * 60.0,
        );
        if rng.bool() {
            collision_box.rotate(rng.f32() * 360.0);
        }
        boxes.push(collision_box);
    }
    for a in &boxes {
        for b in &boxes {
            assert_eq!(a.intersects(b), b.intersects(a));
        }
    }

    for _ in 0..100 {
        let segment = LineSegment::new(
            rng.f32() * 200.0,
            rng.f32() * 200.0,
            rng.f32() * 200.0,
            rng.f32() * 200.0,
        );
        for collision_box in &boxes {
            // A segment with an endpoint inside the box must intersect it.
            if collision_box.contains_point(&segment.point_a)
                || collision_box.contains_point(&segment.point_b)
            {
                assert!(collision_box.intersects_segment(&segment));
            }
        }
    }
}

#[test]
fn polygon_and_box_agree_on_shared_geometry() {
    let collision_box = CollisionBox::new(10.0, 10.0, 30.0, 20.0);
    let polygon = Polygon::new(&[
        Point::new(10.0, 10.0),
        Point::new(40.0, 10.0),
        Point::new(40.0, 30.0),
        Point::new(10.0, 30.0),
    ]);
    assert!(collision_box.intersects_polygon(&polygon));
    for (x, y) in [(15.0, 15.0), (39.0, 29.0), (9.0, 9.0), (41.0, 15.0)] {
        assert_eq!(collision_box.contains(x, y), polygon.contains(x, y));
    }
}

#[test]
fn hexagon_queries() {
    let hexagon = RegularHexagon::new(50.0, 50.0, 20.0);
    assert!(hexagon.contains(50.0, 50.0));
    assert!(!hexagon.contains(50.0, 29.0));

    // A segment crossing the hexagon horizontally.
    assert!(hexagon.shape().intersects_segment(&LineSegment::new(0.0, 50.0, 100.0, 50.0)));
    // A segment passing well above it.
    assert!(!hexagon.shape().intersects_segment(&LineSegment::new(0.0, 10.0, 100.0, 10.0)));
}

#[test]
fn regular_shape_translate_and_radius_rebuild() {
    let mut hexagon = RegularHexagon::new(0.0, 0.0, 10.0);
    hexagon.shape_mut().set(30.0, 40.0);
    assert_eq!(hexagon.x(), 30.0);
    assert_eq!(hexagon.shape().corner_x(0), 30.0);
    assert_eq!(hexagon.shape().corner_y(0), 30.0);

    hexagon.shape_mut().set_radius(25.0);
    assert_eq!(hexagon.shape().corner_y(0), 15.0);
    assert!(hexagon.contains(30.0, 40.0));
}

#[test]
fn pool_reissues_fresh_identity_and_empty_registries() {
    let geometry = Geometry::new();
    let counter = Arc::new(PositionCounter::default());

    let mut first = geometry.collision_box();
    first.add_position_change_listener(counter.clone());
    first.set_x(10.0);
    assert_eq!(counter.0.load(Ordering::Relaxed), 1);
    let first_id = first.id();
    first.release();

    // The reissued instance must not remember the old listener or id.
    let mut second = geometry.collision_box();
    assert_ne!(second.id(), first_id);
    assert_eq!(second.position_listener_count(), 0);
    second.set_x(99.0);
    assert_eq!(counter.0.load(Ordering::Relaxed), 1);
}

#[test]
fn pool_reissues_ids_monotonically_under_churn() {
    let geometry = Geometry::new();
    let mut last_id = geometry.collision_box().id();
    for _ in 0..1000 {
        let collision_box = geometry.collision_box();
        assert!(collision_box.id() > last_id);
        last_id = collision_box.id();
        collision_box.release();
    }
}

#[test]
fn line_segment_shape_contract() {
    let mut segment = LineSegment::new(0.0, 0.0, 10.0, 0.0);
    assert_eq!(Shape::number_of_sides(&segment), 1);
    assert!(Shape::contains(&segment, 5.0, 0.0));

    Shape::translate(&mut segment, 0.0, 5.0);
    assert!(Shape::contains(&segment, 5.0, 5.0));

    Shape::rotate(&mut segment, 90.0);
    // Midpoint (5, 5) is fixed; the segment is now vertical.
    assert!((segment.point_a.x - 5.0).abs() < 1e-3);
    assert!(Shape::min_y(&segment).abs() < 1e-3);
    assert!((Shape::max_y(&segment) - 10.0).abs() < 1e-3);
}
