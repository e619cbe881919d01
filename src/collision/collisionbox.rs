use std::sync::Arc;

use crate::geom::{LineSegment, Point, Polygon, Rectangle};

use super::geometry::Geometry;
use super::id::COLLISION_IDS;
use super::listener::{ListenerList, PositionChangeListener, SizeChangeListener};

/// A mutable, observable, poolable collision box.
///
/// Each box carries a process-unique id, owns its boxed geometry (an
/// axis-aligned-then-rotatable [`Rectangle`]) and notifies registered
/// listeners on position and size changes through disjoint channels.
///
/// Every mutator is atomic with respect to observers: the geometry is
/// fully updated before any notification fires, so a listener never sees
/// an intermediate state.
#[derive(Debug)]
pub struct CollisionBox {
    id: u32,
    bounds: Rectangle,
    position_listeners: ListenerList<dyn PositionChangeListener>,
    size_listeners: ListenerList<dyn SizeChangeListener>,
    pool: Option<Geometry>,
}

impl Default for CollisionBox {
    fn default() -> Self {
        CollisionBox::new(0.0, 0.0, 1.0, 1.0)
    }
}

impl CollisionBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        CollisionBox {
            id: COLLISION_IDS.next_id(),
            bounds: Rectangle::new(x, y, width, height),
            position_listeners: ListenerList::default(),
            size_listeners: ListenerList::default(),
            pool: None,
        }
    }

    pub(crate) fn pooled(pool: Geometry) -> Self {
        let mut collision_box = CollisionBox::default();
        collision_box.pool = Some(pool);
        collision_box
    }

    /// Re-arm a recycled instance: fresh id, default bounds, no rotation,
    /// empty listener registries.
    pub(crate) fn reset_for_reuse(&mut self, pool: Geometry) {
        self.id = COLLISION_IDS.next_id();
        self.bounds = Rectangle::default();
        self.position_listeners.clear();
        self.size_listeners.clear();
        self.pool = Some(pool);
    }

    pub(crate) fn detach_pool(&mut self) -> Option<Geometry> {
        self.pool.take()
    }

    /// The process-unique identity, immutable after construction. Two
    /// boxes constructed at different times never share an id, even when
    /// the pool reuses storage.
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn x(&self) -> f32 {
        self.bounds.x()
    }

    pub fn y(&self) -> f32 {
        self.bounds.y()
    }

    pub fn width(&self) -> f32 {
        self.bounds.width()
    }

    pub fn height(&self) -> f32 {
        self.bounds.height()
    }

    pub fn rotation(&self) -> f32 {
        self.bounds.rotation()
    }

    pub fn center_x(&self) -> f32 {
        self.bounds.center_x()
    }

    pub fn center_y(&self) -> f32 {
        self.bounds.center_y()
    }

    /// The underlying box geometry.
    pub fn bounds(&self) -> &Rectangle {
        &self.bounds
    }

    /// Set the anchor X coordinate.
    ///
    /// Setting the current value (exact float equality) is a complete
    /// no-op: no polygon update, no notification. Otherwise the geometry
    /// translates by the delta and every position listener is notified
    /// exactly once, in registration order.
    pub fn set_x(&mut self, x: f32) {
        if x == self.bounds.x() {
            return;
        }
        self.bounds.set_x(x);
        self.notify_position_changed();
    }

    /// Set the anchor Y coordinate. See [`CollisionBox::set_x`].
    pub fn set_y(&mut self, y: f32) {
        if y == self.bounds.y() {
            return;
        }
        self.bounds.set_y(y);
        self.notify_position_changed();
    }

    /// Resize, preserving the anchor corner. Fires exactly one size
    /// notification and no position notification, even though vertex
    /// coordinates move.
    pub fn set_width(&mut self, width: f32) {
        if width == self.bounds.width() {
            return;
        }
        self.bounds.set_width(width);
        self.notify_size_changed();
    }

    /// See [`CollisionBox::set_width`].
    pub fn set_height(&mut self, height: f32) {
        if height == self.bounds.height() {
            return;
        }
        self.bounds.set_height(height);
        self.notify_size_changed();
    }

    /// Combined update: at most one position and at most one size
    /// notification, each only if that aspect actually changed. Use this
    /// instead of separate `set_x` + `set_width` calls to avoid double
    /// notification.
    pub fn set(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let moved = x != self.bounds.x() || y != self.bounds.y();
        let resized = width != self.bounds.width() || height != self.bounds.height();
        if !moved && !resized {
            return;
        }
        self.bounds.set(x, y, width, height);
        if moved {
            self.notify_position_changed();
        }
        if resized {
            self.notify_size_changed();
        }
    }

    /// Move both anchor coordinates. Fires at most one position
    /// notification.
    pub fn set_position(&mut self, x: f32, y: f32) {
        let width = self.bounds.width();
        let height = self.bounds.height();
        self.set(x, y, width, height);
    }

    /// Rotate about the box center. Rotation is its own aspect: neither
    /// the position nor the size channel fires.
    pub fn rotate(&mut self, degrees: f32) {
        self.bounds.rotate(degrees);
    }

    /// Set the absolute rotation about the box center. No notifications.
    pub fn set_rotation(&mut self, degrees: f32) {
        self.bounds.set_rotation(degrees);
    }

    /// Strict-interior containment; correct under rotation.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.bounds.contains(x, y)
    }

    pub fn contains_point(&self, point: &Point) -> bool {
        self.bounds.contains_point(point)
    }

    /// Whether `other` lies entirely inside this box (touching edges
    /// included).
    pub fn contains_box(&self, other: &CollisionBox) -> bool {
        self.bounds.contains_rectangle(&other.bounds)
    }

    pub fn contains_rectangle(&self, rectangle: &Rectangle) -> bool {
        self.bounds.contains_rectangle(rectangle)
    }

    pub fn intersects(&self, other: &CollisionBox) -> bool {
        self.bounds.intersects(&other.bounds)
    }

    pub fn intersects_rectangle(&self, rectangle: &Rectangle) -> bool {
        self.bounds.intersects(rectangle)
    }

    pub fn intersects_polygon(&self, polygon: &Polygon) -> bool {
        self.bounds.intersects_polygon(polygon)
    }

    pub fn intersects_segment(&self, segment: &LineSegment) -> bool {
        self.bounds.intersects_segment(segment)
    }

    pub fn intersects_line_segment(&self, point_a: &Point, point_b: &Point) -> bool {
        self.bounds.intersects_line_segment(point_a, point_b)
    }

    pub fn add_position_change_listener(&mut self, listener: Arc<dyn PositionChangeListener>) {
        self.position_listeners.add(&listener);
    }

    pub fn remove_position_change_listener(&mut self, listener: Arc<dyn PositionChangeListener>) {
        self.position_listeners.remove(&listener);
    }

    pub fn add_size_change_listener(&mut self, listener: Arc<dyn SizeChangeListener>) {
        self.size_listeners.add(&listener);
    }

    pub fn remove_size_change_listener(&mut self, listener: Arc<dyn SizeChangeListener>) {
        self.size_listeners.remove(&listener);
    }

    pub fn position_listener_count(&self) -> usize {
        self.position_listeners.len()
    }

    pub fn size_listener_count(&self) -> usize {
        self.size_listeners.len()
    }

    /// Return this box to its owning pool, or drop it if it was not
    /// obtained from one. Consuming `self` makes use-after-release
    /// unrepresentable: prior holders cannot touch an instance the pool
    /// may reissue.
    pub fn release(mut self) {
        if let Some(pool) = self.pool.take() {
            pool.reclaim(self);
        }
    }

    fn notify_position_changed(&self) {
        self.position_listeners
            .notify(|listener| listener.position_changed(self));
    }

    fn notify_size_changed(&self) {
        self.size_listeners
            .notify(|listener| listener.size_changed(self));
    }
}
