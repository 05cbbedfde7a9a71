//! Throw Control Systems
//!
//! Contains the tap-to-throw system and the system that releases the spin
//! torque once it has been held for its duration.

use super::state::*;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::ar_scene::hit_test::hit_test;
use crate::ar_scene::types::{DemoSettings, Die, DieState, PlaneAnchor, TapRay};

/// Take the die out of the scene: hidden, and skipped by the physics step.
pub fn detach_die(
    commands: &mut Commands,
    entity: Entity,
    state: &mut DieState,
    visibility: &mut Visibility,
) {
    state.attached = false;
    *visibility = Visibility::Hidden;
    commands.entity(entity).insert(RigidBodyDisabled);
}

pub fn attach_die(
    commands: &mut Commands,
    entity: Entity,
    state: &mut DieState,
    visibility: &mut Visibility,
) {
    state.attached = true;
    *visibility = Visibility::Inherited;
    commands.entity(entity).remove::<RigidBodyDisabled>();
}

/// System to throw the die onto the plane under each tap.
///
/// The tap ray is hit-tested against recognized planes using their extent.
/// A miss leaves the die untouched. A hit clears all forces on the die and
/// drops it above the nearest hit point. It then gets a random spin torque
/// and a small upward impulse.
#[allow(clippy::type_complexity)]
pub fn throw_die_on_tap(
    mut commands: Commands,
    mut taps: MessageReader<TapRay>,
    settings: Res<DemoSettings>,
    anchors: Query<(Entity, &PlaneAnchor, &Transform), Without<Die>>,
    mut dice_query: Query<
        (
            Entity,
            &mut Transform,
            &mut Velocity,
            &mut ExternalForce,
            &mut ExternalImpulse,
            &mut DieState,
            &mut Visibility,
        ),
        With<Die>,
    >,
) {
    let params = ThrowParams::from_settings(&settings);
    let mut rng = rand::thread_rng();

    for tap in taps.read() {
        let hits = hit_test(tap.ray, anchors.iter());
        let Some(hit) = hits.first() else {
            trace!("Tap missed every recognized plane");
            continue;
        };

        let Ok((
            entity,
            mut transform,
            mut velocity,
            mut force,
            mut impulse,
            mut state,
            mut visibility,
        )) = dice_query.single_mut()
        else {
            warn!("Tap hit plane {} but no die exists", hit.anchor_id);
            return;
        };

        clear_all_forces(&mut velocity, &mut force, &mut impulse);
        detach_die(&mut commands, entity, &mut state, &mut visibility);

        transform.translation = params.spawn_position(hit.world_position);

        let spin = SpinImpulse::random(&mut rng);
        force.torque = spin.torque();
        commands
            .entity(entity)
            .insert(ThrowTorque::new(params.torque_duration_secs));

        impulse.impulse = params.upward_impulse();

        attach_die(&mut commands, entity, &mut state, &mut visibility);

        debug!(
            "Threw die from {:?} on plane {} with spin {:?}",
            transform.translation,
            hit.anchor_id,
            spin.components()
        );
    }
}

/// System to clear the spin torque once its hold time has elapsed.
///
/// Must run before `throw_die_on_tap` so a fresh torque survives at least
/// one physics step.
pub fn expire_throw_torque(
    mut commands: Commands,
    time: Res<Time>,
    mut torque_query: Query<(Entity, &mut ThrowTorque, &mut ExternalForce)>,
) {
    for (entity, mut torque, mut force) in torque_query.iter_mut() {
        torque.timer.tick(time.delta());
        if torque.timer.is_finished() {
            force.torque = Vec3::ZERO;
            commands.entity(entity).remove::<ThrowTorque>();
        }
    }
}
