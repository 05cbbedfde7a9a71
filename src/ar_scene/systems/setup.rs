//! Scene setup systems
//!
//! This module spawns the camera and light, and builds the single die that
//! every throw reuses.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::ar_scene::face_textures::generate_face_image;
use crate::ar_scene::meshes::{create_die_collider, create_face_mesh, face_offset};
use crate::ar_scene::types::*;

pub fn setup_scene(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 0.45, 0.8).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(1.0, 3.0, 2.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// One texture handle per face, in face order.
///
/// Configured paths are loaded through the asset server; otherwise pip
/// textures are generated.
pub fn face_texture_handles(
    settings: &DemoSettings,
    asset_server: Option<&AssetServer>,
    images: &mut Assets<Image>,
) -> Vec<Handle<Image>> {
    if settings.face_textures.len() == FACE_TEXTURE_COUNT {
        if let Some(server) = asset_server {
            return settings
                .face_textures
                .iter()
                .map(|path| server.load(path.clone()))
                .collect();
        }
        warn!("Face textures configured but no asset server; using generated faces");
    }

    DieFace::ALL
        .iter()
        .map(|face| images.add(generate_face_image(*face)))
        .collect()
}

/// Startup system building the die: a cube of six textured faces with a
/// dynamic cuboid collider. It starts detached until the first throw.
pub fn init_dice(
    mut commands: Commands,
    settings: Res<DemoSettings>,
    asset_server: Option<Res<AssetServer>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
) {
    let edge = settings.die_length;
    let face_mesh = meshes.add(create_face_mesh(edge));
    let textures = face_texture_handles(&settings, asset_server.as_deref(), &mut images);

    let die = commands
        .spawn((
            Name::new("Die"),
            Die { edge_length: edge },
            DieState::default(),
            Transform::default(),
            Visibility::Hidden,
            (
                RigidBody::Dynamic,
                create_die_collider(edge),
                ColliderMassProperties::Mass(settings.die_mass),
                Restitution::coefficient(0.5),
                Friction::coefficient(0.5),
                Velocity::zero(),
                ExternalForce::default(),
                ExternalImpulse::default(),
                RigidBodyDisabled,
            ),
        ))
        .id();

    for (face, texture) in DieFace::ALL.into_iter().zip(textures) {
        let material = materials.add(StandardMaterial {
            base_color_texture: Some(texture),
            perceptual_roughness: 0.6,
            ..default()
        });

        commands.spawn((
            DieFaceMarker(face),
            Mesh3d(face_mesh.clone()),
            MeshMaterial3d(material),
            face_offset(face, edge),
            ChildOf(die),
        ));
    }

    info!("Die ready (edge {:.3} m)", edge);
}
