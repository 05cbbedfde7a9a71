//! Floor placement
//!
//! The first detected plane gets a dark kinematic floor; later planes are
//! ignored for floor purposes.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::ar_scene::meshes::{create_floor, FloorGeometry};
use crate::ar_scene::types::*;

pub const DEFAULT_FLOOR_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.9);

/// System placing the floor on the first detected plane anchor.
///
/// The floor is parented to the anchor, so its position is anchor-local.
/// Placing it also turns off the feature point overlay.
pub fn on_plane_detected(
    mut commands: Commands,
    mut anchor_events: MessageReader<PlaneAnchorAdded>,
    mut floor_state: ResMut<FloorState>,
    mut overlay: ResMut<DebugOverlay>,
    settings: Res<DemoSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for event in anchor_events.read() {
        if floor_state.is_floor_recognized {
            debug!("Plane {} detected; floor already placed", event.anchor.id);
            continue;
        }

        let geometry = FloorGeometry::from_anchor(&event.anchor, settings.floor_thickness);
        let (mesh, collider) = create_floor(&geometry);

        let color = settings.floor_color().unwrap_or_else(|err| {
            warn!("{}; using default floor colour", err);
            DEFAULT_FLOOR_COLOR
        });
        let alpha_mode = if color.to_srgba().alpha < 1.0 {
            AlphaMode::Blend
        } else {
            AlphaMode::Opaque
        };

        let floor = commands
            .spawn((
                Name::new("Floor"),
                Floor {
                    size: geometry.size,
                },
                Mesh3d(meshes.add(mesh)),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: color,
                    alpha_mode,
                    perceptual_roughness: 0.9,
                    ..default()
                })),
                Transform::from_translation(geometry.local_position),
                RigidBody::KinematicPositionBased,
                collider,
                ChildOf(event.entity),
            ))
            .id();

        overlay.show_feature_points = false;
        floor_state.is_floor_recognized = true;
        floor_state.floor = Some(floor);

        info!(
            "Floor placed on plane {} ({:.2} x {:.2})",
            event.anchor.id, geometry.size.x, geometry.size.z
        );
    }
}
