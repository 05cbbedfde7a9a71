use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::ar_scene::session::*;
use crate::ar_scene::systems::*;
use crate::ar_scene::throw_control::*;
use crate::ar_scene::types::*;

/// Scene logic that needs neither a window nor a renderer: the session,
/// floor placement and throws. Insert `DemoSettings` before adding it.
pub struct ArDiceCorePlugin;

impl Plugin for ArDiceCorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DemoSettings>()
            .init_resource::<FloorState>()
            .init_resource::<DebugOverlay>()
            .init_resource::<ArSession>()
            .add_message::<PlaneAnchorAdded>()
            .add_message::<TapInput>()
            .add_message::<TapRay>()
            .add_systems(Startup, (init_dice, start_session))
            // Torque expiry runs before throwing so a new spin lasts at
            // least one physics step.
            .add_systems(
                Update,
                (
                    advance_session,
                    on_plane_detected,
                    expire_throw_torque,
                    throw_die_on_tap,
                )
                    .chain(),
            );
    }
}

/// The full interactive demo: physics, camera, input and debug overlay.
#[derive(Default)]
pub struct ArDicePlugin {
    /// Draw Rapier's collider wireframes
    pub debug_physics: bool,
}

impl Plugin for ArDicePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default());
        if self.debug_physics {
            app.add_plugins(RapierDebugRenderPlugin::default());
        }

        app.add_plugins(ArDiceCorePlugin)
            .add_systems(Startup, setup_scene)
            .add_systems(Update, sync_session_with_focus.before(advance_session))
            .add_systems(
                Update,
                (emit_tap_input, resolve_tap_rays)
                    .chain()
                    .before(throw_die_on_tap),
            )
            .add_systems(Update, (move_camera, draw_feature_points));
    }
}
