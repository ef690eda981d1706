//! Renderer contract
//!
//! The simulation never draws. Each frame it reports one [`RenderItem`] per
//! body to a [`RenderCollector`] supplied by the host, which owns all
//! graphics work.

use impulse3d_math::Vec3;
use impulse3d_physics::{BodyKey, RigidBody, Shape, ShapeKind};

/// Geometry the renderer needs to draw a body
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderGeometry {
    /// Full box size along each axis
    Box { size: Vec3 },
    Sphere { radius: f32 },
}

/// Snapshot of one body for drawing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderItem {
    pub key: BodyKey,
    pub kind: ShapeKind,
    pub position: Vec3,
    /// Orientation proxy (Euler angles, radians)
    pub rotation: Vec3,
    pub geometry: RenderGeometry,
    pub color: [f32; 3],
}

impl RenderItem {
    /// Capture the drawable state of a body
    pub fn from_body(key: BodyKey, body: &RigidBody) -> Self {
        let geometry = match body.shape() {
            Shape::Box(b) => RenderGeometry::Box { size: b.size() },
            Shape::Sphere(s) => RenderGeometry::Sphere { radius: s.radius() },
        };
        Self {
            key,
            kind: body.shape().kind(),
            position: body.position(),
            rotation: body.rotation(),
            geometry,
            color: body.color(),
        }
    }
}

/// Receives body snapshots during [`Simulation::render`](super::Simulation::render)
pub trait RenderCollector {
    fn submit(&mut self, item: RenderItem);
}

/// Collects every submitted item into a list
#[derive(Debug, Default)]
pub struct RenderList {
    items: Vec<RenderItem>,
}

impl RenderList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[RenderItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop the previous frame's items
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl RenderCollector for RenderList {
    fn submit(&mut self, item: RenderItem) {
        self.items.push(item);
    }
}

/// Writes each item to the log; used by the headless host
#[derive(Debug, Default)]
pub struct LogCollector {
    submitted: usize,
}

impl LogCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items logged so far
    pub fn submitted(&self) -> usize {
        self.submitted
    }
}

impl RenderCollector for LogCollector {
    fn submit(&mut self, item: RenderItem) {
        self.submitted += 1;
        match item.geometry {
            RenderGeometry::Box { size } => log::debug!(
                "box    {:?} pos=({:.3}, {:.3}, {:.3}) size=({:.2}, {:.2}, {:.2}) color={:?}",
                item.key, item.position.x, item.position.y, item.position.z,
                size.x, size.y, size.z, item.color
            ),
            RenderGeometry::Sphere { radius } => log::debug!(
                "sphere {:?} pos=({:.3}, {:.3}, {:.3}) radius={:.2} color={:?}",
                item.key, item.position.x, item.position.y, item.position.z,
                radius, item.color
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> BodyKey {
        BodyKey::default()
    }

    #[test]
    fn test_item_from_box_body() {
        let body = RigidBody::new(Shape::cuboid(Vec3::new(0.5, 1.0, 2.0)).unwrap(), Vec3::Y, 1.0)
            .unwrap()
            .with_color([1.0, 0.0, 0.0]);
        let item = RenderItem::from_body(key(), &body);

        assert_eq!(item.kind, ShapeKind::Box);
        assert_eq!(item.position, Vec3::Y);
        assert_eq!(item.geometry, RenderGeometry::Box { size: Vec3::new(1.0, 2.0, 4.0) });
        assert_eq!(item.color, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_item_from_sphere_body() {
        let body = RigidBody::new(Shape::sphere(0.75).unwrap(), Vec3::ZERO, 1.0).unwrap();
        let item = RenderItem::from_body(key(), &body);

        assert_eq!(item.kind, ShapeKind::Sphere);
        assert_eq!(item.geometry, RenderGeometry::Sphere { radius: 0.75 });
    }

    #[test]
    fn test_render_list_collects() {
        let body = RigidBody::new(Shape::sphere(1.0).unwrap(), Vec3::ZERO, 1.0).unwrap();
        let mut list = RenderList::new();
        list.submit(RenderItem::from_body(key(), &body));
        list.submit(RenderItem::from_body(key(), &body));
        assert_eq!(list.len(), 2);

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_log_collector_counts() {
        let body = RigidBody::new(Shape::sphere(1.0).unwrap(), Vec3::ZERO, 1.0).unwrap();
        let mut collector = LogCollector::new();
        collector.submit(RenderItem::from_body(key(), &body));
        assert_eq!(collector.submitted(), 1);
    }
}
