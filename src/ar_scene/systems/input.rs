//! Input handling systems
//!
//! Left clicks and touch starts become `TapInput`s, which are then turned
//! into world rays from the main camera.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::ar_scene::types::*;

pub fn emit_tap_input(
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut taps: MessageWriter<TapInput>,
) {
    if mouse.just_pressed(MouseButton::Left) {
        if let Some(cursor) = windows.single().ok().and_then(|w| w.cursor_position()) {
            taps.write(TapInput {
                screen_point: cursor,
            });
        }
    }

    for touch in touches.iter_just_pressed() {
        taps.write(TapInput {
            screen_point: touch.position(),
        });
    }
}

/// System casting a ray from the main camera through each tapped point
pub fn resolve_tap_rays(
    mut taps: MessageReader<TapInput>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut rays: MessageWriter<TapRay>,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        taps.clear();
        return;
    };

    for tap in taps.read() {
        match camera.viewport_to_world(camera_transform, tap.screen_point) {
            Ok(ray) => {
                rays.write(TapRay { ray });
            }
            Err(err) => trace!("No world ray for tap at {:?}: {:?}", tap.screen_point, err),
        }
    }
}
