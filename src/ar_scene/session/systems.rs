//! Session Systems
//!
//! Contains the systems driving the simulated session: starting it,
//! following window focus, reporting detected planes and drawing the
//! debug feature points.

use super::state::*;
use bevy::prelude::*;
use bevy::window::WindowFocused;

use crate::ar_scene::types::{DebugOverlay, PlaneAnchorAdded};

const FEATURE_POINT_RADIUS: f32 = 0.003;
const FEATURE_POINT_COLOR: Color = Color::srgb(1.0, 0.85, 0.1);

/// Startup system: begin tracking as soon as the scene exists.
pub fn start_session(mut session: ResMut<ArSession>) {
    session.run();
    info!("AR session running");
}

/// System to run the session while the window has focus and pause it
/// otherwise.
pub fn sync_session_with_focus(
    mut focus_events: MessageReader<WindowFocused>,
    mut session: ResMut<ArSession>,
) {
    // Only the latest focus change matters
    let Some(event) = focus_events.read().last() else {
        return;
    };

    if event.focused && !session.is_running() {
        session.run();
        info!("AR session resumed");
    } else if !event.focused && session.is_running() {
        session.pause();
        info!("AR session paused");
    }
}

/// System to spawn an anchor entity for every plane detected this frame
/// and announce it with `PlaneAnchorAdded`.
pub fn advance_session(
    mut commands: Commands,
    time: Res<Time>,
    mut session: ResMut<ArSession>,
    mut anchor_events: MessageWriter<PlaneAnchorAdded>,
) {
    for index in session.advance(time.delta_secs()) {
        let Some((anchor, transform)) = session.anchor_for(index) else {
            continue;
        };

        let entity = commands
            .spawn((
                Name::new(format!("PlaneAnchor{}", anchor.id)),
                anchor.clone(),
                transform,
                Visibility::default(),
            ))
            .id();

        info!(
            "Detected plane {} (extent {:.2} x {:.2}) after {:.1}s",
            anchor.id,
            anchor.extent.x,
            anchor.extent.z,
            session.tracking_time()
        );
        anchor_events.write(PlaneAnchorAdded { entity, anchor });
    }
}

pub fn draw_feature_points(
    mut gizmos: Gizmos,
    session: Res<ArSession>,
    overlay: Res<DebugOverlay>,
) {
    if !overlay.show_feature_points {
        return;
    }

    for point in session.feature_points() {
        gizmos.sphere(
            Isometry3d::from_translation(*point),
            FEATURE_POINT_RADIUS,
            FEATURE_POINT_COLOR,
        );
    }
}
