use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::ar_scene::types::DieFace;

/// A square quad covering one face of a cube with the given edge.
pub fn create_face_mesh(edge: f32) -> Mesh {
    Mesh::from(Rectangle::new(edge, edge))
}

/// Local transform of a face quad on a cube with the given edge.
pub fn face_offset(face: DieFace, edge: f32) -> Transform {
    Transform::from_translation(face.normal() * edge * 0.5).with_rotation(face.rotation())
}

pub fn create_die_collider(edge: f32) -> Collider {
    let half = edge * 0.5;
    Collider::cuboid(half, half, half)
}
