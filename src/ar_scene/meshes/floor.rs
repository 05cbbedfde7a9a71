use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::ar_scene::types::PlaneAnchor;

/// Size and anchor-local placement of the floor box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorGeometry {
    /// width (x), thickness (y), length (z)
    pub size: Vec3,
    pub local_position: Vec3,
}

impl FloorGeometry {
    /// Floor covering the anchor's extent, centered on its center at height 0.
    pub fn from_anchor(anchor: &PlaneAnchor, thickness: f32) -> Self {
        Self {
            size: Vec3::new(anchor.extent.x, thickness, anchor.extent.z),
            local_position: Vec3::new(anchor.center.x, 0.0, anchor.center.z),
        }
    }
}

/// Mesh and kinematic collider for the floor box.
pub fn create_floor(geometry: &FloorGeometry) -> (Mesh, Collider) {
    let size = geometry.size;
    let mesh = Mesh::from(Cuboid::new(size.x, size.y, size.z));
    let collider = Collider::cuboid(size.x / 2.0, size.y / 2.0, size.z / 2.0);
    (mesh, collider)
}
