//! Camera control systems
//!
//! The camera stands in for the handheld device: A/D (or arrows) orbit
//! around the scene origin, W/S move closer or further away.

use bevy::prelude::*;

use crate::ar_scene::types::MainCamera;

const ROTATION_SPEED: f32 = 1.0;
const DOLLY_SPEED: f32 = 0.5;
const MIN_DISTANCE: f32 = 0.3;
const MAX_DISTANCE: f32 = 2.5;

pub fn move_camera(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let dt = time.delta_secs();

    for mut transform in camera_query.iter_mut() {
        let mut angle = 0.0;
        if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
            angle += ROTATION_SPEED * dt;
        }
        if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
            angle -= ROTATION_SPEED * dt;
        }

        let mut dolly = 0.0;
        if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
            dolly -= DOLLY_SPEED * dt;
        }
        if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
            dolly += DOLLY_SPEED * dt;
        }

        if angle == 0.0 && dolly == 0.0 {
            continue;
        }

        let pos = Quat::from_rotation_y(angle) * transform.translation;
        let distance = (pos.length() + dolly).clamp(MIN_DISTANCE, MAX_DISTANCE);
        transform.translation = pos.normalize_or_zero() * distance;
        *transform = transform.looking_at(Vec3::ZERO, Vec3::Y);
    }
}
