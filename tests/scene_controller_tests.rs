//! Headless tests for floor placement and tap-to-throw

use ardice::ar_scene::*;
use bevy::prelude::*;
use bevy::window::WindowFocused;
use bevy_rapier3d::prelude::*;

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(Assets::<Mesh>::default())
        .insert_resource(Assets::<StandardMaterial>::default())
        .insert_resource(Assets::<Image>::default())
        // No scripted planes: tests announce anchors themselves.
        .insert_resource(DemoSettings {
            planes: Vec::new(),
            ..default()
        })
        .add_plugins(ArDiceCorePlugin);
    app.update();
    app
}

fn anchor_count(app: &mut App) -> usize {
    let mut query = app.world_mut().query::<&PlaneAnchor>();
    query.iter(app.world()).count()
}

fn spawn_anchor(app: &mut App, id: u32, center: Vec3, extent: Vec3, transform: Transform) -> Entity {
    let anchor = PlaneAnchor { id, center, extent };
    let entity = app.world_mut().spawn((anchor.clone(), transform)).id();
    app.world_mut()
        .write_message(PlaneAnchorAdded { entity, anchor });
    entity
}

fn die_entity(app: &mut App) -> Entity {
    let mut query = app.world_mut().query_filtered::<Entity, With<Die>>();
    let dice: Vec<Entity> = query.iter(app.world()).collect();
    assert_eq!(dice.len(), 1, "exactly one die should exist");
    dice[0]
}

fn tap_down_at(app: &mut App, x: f32, z: f32) {
    app.world_mut().write_message(TapRay {
        ray: Ray3d::new(Vec3::new(x, 1.0, z), Dir3::NEG_Y),
    });
    app.update();
}

fn floor_count(app: &mut App) -> usize {
    let mut query = app.world_mut().query_filtered::<Entity, With<Floor>>();
    query.iter(app.world()).count()
}

#[test]
fn test_die_initialized_detached_with_six_faces() {
    let mut app = test_app();
    let die = die_entity(&mut app);

    let world = app.world();
    assert!(!world.get::<DieState>(die).unwrap().attached);
    assert_eq!(*world.get::<Visibility>(die).unwrap(), Visibility::Hidden);
    assert!(world.get::<RigidBodyDisabled>(die).is_some());
    assert_eq!(*world.get::<RigidBody>(die).unwrap(), RigidBody::Dynamic);
    assert_eq!(world.get::<Die>(die).unwrap().edge_length, 0.04);

    let mut faces_query = app
        .world_mut()
        .query::<(&DieFaceMarker, &ChildOf, &MeshMaterial3d<StandardMaterial>)>();
    let mut faces: Vec<usize> = faces_query
        .iter(app.world())
        .map(|(face, parent, _)| {
            assert_eq!(parent.parent(), die);
            face.0.index()
        })
        .collect();
    faces.sort();
    assert_eq!(faces, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_tap_without_planes_is_noop() {
    let mut app = test_app();
    let die = die_entity(&mut app);
    let before = *app.world().get::<Transform>(die).unwrap();

    tap_down_at(&mut app, 0.0, 0.0);

    let world = app.world();
    assert_eq!(*world.get::<Transform>(die).unwrap(), before);
    assert!(!world.get::<DieState>(die).unwrap().attached);
}

#[test]
fn test_tap_hit_places_die_above_hit_point() {
    let mut app = test_app();
    spawn_anchor(
        &mut app,
        0,
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 1.0),
        Transform::IDENTITY,
    );
    app.update();
    let die = die_entity(&mut app);

    tap_down_at(&mut app, 0.25, -0.125);

    let world = app.world();
    let transform = world.get::<Transform>(die).unwrap();
    assert_eq!(transform.translation, Vec3::new(0.25, 0.0 + 0.2, -0.125));
    assert!(world.get::<DieState>(die).unwrap().attached);
    assert_eq!(*world.get::<Visibility>(die).unwrap(), Visibility::Inherited);
    assert!(world.get::<RigidBodyDisabled>(die).is_none());

    let impulse = world.get::<ExternalImpulse>(die).unwrap();
    assert_eq!(impulse.impulse, Vec3::Y);

    let force = world.get::<ExternalForce>(die).unwrap();
    assert_eq!(force.force, Vec3::ZERO);
    let magnitude = force.torque.length();
    assert!(
        (0.1 - 1e-5..=1.0 + 1e-5).contains(&magnitude),
        "torque magnitude {} outside [0.1, 1.0]",
        magnitude
    );
    assert!(force.torque.min_element() > 0.0);
    assert!(world.get::<ThrowTorque>(die).is_some());
}

#[test]
fn test_tap_miss_after_throw_leaves_die_unchanged() {
    let mut app = test_app();
    spawn_anchor(
        &mut app,
        0,
        Vec3::ZERO,
        Vec3::new(0.5, 0.0, 0.5),
        Transform::IDENTITY,
    );
    app.update();
    let die = die_entity(&mut app);

    tap_down_at(&mut app, 0.1, 0.1);
    let placed = *app.world().get::<Transform>(die).unwrap();
    assert!(app.world().get::<DieState>(die).unwrap().attached);

    // Outside the plane's extent
    tap_down_at(&mut app, 2.0, 2.0);

    let world = app.world();
    assert_eq!(*world.get::<Transform>(die).unwrap(), placed);
    assert!(world.get::<DieState>(die).unwrap().attached);
}

#[test]
fn test_rethrow_clears_residual_motion() {
    let mut app = test_app();
    spawn_anchor(
        &mut app,
        0,
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 1.0),
        Transform::IDENTITY,
    );
    app.update();
    let die = die_entity(&mut app);

    tap_down_at(&mut app, 0.0, 0.0);

    // Simulate a die still tumbling from the previous throw
    {
        let mut entity = app.world_mut().entity_mut(die);
        *entity.get_mut::<Velocity>().unwrap() = Velocity {
            linvel: Vec3::new(3.0, -2.0, 1.0),
            angvel: Vec3::new(10.0, 5.0, -7.0),
        };
        entity.get_mut::<ExternalForce>().unwrap().force = Vec3::new(5.0, 0.0, 5.0);
        entity.get_mut::<ExternalImpulse>().unwrap().torque_impulse = Vec3::ONE;
    }

    tap_down_at(&mut app, 0.3, 0.3);

    let world = app.world();
    let velocity = world.get::<Velocity>(die).unwrap();
    assert_eq!(velocity.linvel, Vec3::ZERO);
    assert_eq!(velocity.angvel, Vec3::ZERO);
    let force = world.get::<ExternalForce>(die).unwrap();
    assert_eq!(force.force, Vec3::ZERO);
    let impulse = world.get::<ExternalImpulse>(die).unwrap();
    assert_eq!(impulse.impulse, Vec3::Y);
    assert_eq!(impulse.torque_impulse, Vec3::ZERO);

    // Same die, moved rather than recreated
    assert_eq!(die_entity(&mut app), die);
}

#[test]
fn test_nearest_plane_wins_hit_test() {
    let mut app = test_app();
    spawn_anchor(
        &mut app,
        0,
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 1.0),
        Transform::from_xyz(0.0, -0.5, 0.0),
    );
    spawn_anchor(
        &mut app,
        1,
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 1.0),
        Transform::from_xyz(0.0, 0.25, 0.0),
    );
    app.update();
    let die = die_entity(&mut app);

    tap_down_at(&mut app, 0.0, 0.0);

    let y = app.world().get::<Transform>(die).unwrap().translation.y;
    assert!((y - 0.45).abs() < 1e-5, "die dropped at y = {}", y);
}

#[test]
fn test_floor_created_once() {
    let mut app = test_app();
    assert!(!app.world().resource::<FloorState>().is_floor_recognized);
    assert!(app.world().resource::<DebugOverlay>().show_feature_points);

    let first = spawn_anchor(
        &mut app,
        0,
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 1.0),
        Transform::IDENTITY,
    );
    spawn_anchor(
        &mut app,
        1,
        Vec3::ZERO,
        Vec3::new(2.0, 0.0, 2.0),
        Transform::from_xyz(1.0, 0.0, 1.0),
    );
    app.update();

    spawn_anchor(
        &mut app,
        2,
        Vec3::ZERO,
        Vec3::new(3.0, 0.0, 3.0),
        Transform::IDENTITY,
    );
    app.update();

    assert_eq!(floor_count(&mut app), 1);
    let state = app.world().resource::<FloorState>();
    assert!(state.is_floor_recognized);
    let floor = state.floor.unwrap();
    assert!(!app.world().resource::<DebugOverlay>().show_feature_points);

    let world = app.world();
    assert_eq!(world.get::<ChildOf>(floor).unwrap().parent(), first);
    assert_eq!(world.get::<Floor>(floor).unwrap().size, Vec3::new(1.0, 0.03, 1.0));
}

#[test]
fn test_floor_matches_plane_extent_and_center() {
    let mut app = test_app();
    spawn_anchor(
        &mut app,
        0,
        Vec3::new(0.2, 0.0, -0.1),
        Vec3::new(1.0, 0.0, 0.5),
        Transform::IDENTITY,
    );
    app.update();

    let floor = app.world().resource::<FloorState>().floor.unwrap();
    let world = app.world();
    assert_eq!(world.get::<Floor>(floor).unwrap().size, Vec3::new(1.0, 0.03, 0.5));
    assert_eq!(
        world.get::<Transform>(floor).unwrap().translation,
        Vec3::new(0.2, 0.0, -0.1)
    );
    assert_eq!(
        *world.get::<RigidBody>(floor).unwrap(),
        RigidBody::KinematicPositionBased
    );
}

#[test]
fn test_throw_keeps_die_rotation() {
    let mut app = test_app();
    spawn_anchor(
        &mut app,
        0,
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 1.0),
        Transform::IDENTITY,
    );
    app.update();
    let die = die_entity(&mut app);

    let tilted = Quat::from_euler(EulerRot::XYZ, 0.4, 1.1, -0.7);
    app.world_mut().get_mut::<Transform>(die).unwrap().rotation = tilted;

    tap_down_at(&mut app, 0.1, -0.2);

    let transform = app.world().get::<Transform>(die).unwrap();
    assert_eq!(transform.rotation, tilted);
    assert_eq!(transform.translation, Vec3::new(0.1, 0.0 + 0.2, -0.2));
}

#[test]
fn test_window_focus_pauses_and_resumes_plane_detection() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(Assets::<Mesh>::default())
        .insert_resource(Assets::<StandardMaterial>::default())
        .insert_resource(Assets::<Image>::default())
        .insert_resource(DemoSettings {
            planes: vec![ScriptedPlane {
                origin: [0.0, 0.0, 0.0],
                yaw_degrees: 0.0,
                center: [0.0, 0.0],
                extent: [1.0, 1.0],
                detect_after_secs: 0.0,
            }],
            ..default()
        })
        .add_plugins(ArDiceCorePlugin)
        .add_message::<WindowFocused>()
        .add_systems(Update, sync_session_with_focus.before(advance_session));

    let window = app.world_mut().spawn_empty().id();

    app.world_mut().write_message(WindowFocused {
        window,
        focused: false,
    });
    app.update();
    app.update();

    assert!(!app.world().resource::<ArSession>().is_running());
    assert_eq!(anchor_count(&mut app), 0);
    assert!(!app.world().resource::<FloorState>().is_floor_recognized);

    app.world_mut().write_message(WindowFocused {
        window,
        focused: true,
    });
    app.update();

    assert!(app.world().resource::<ArSession>().is_running());
    assert_eq!(anchor_count(&mut app), 1);
    assert!(app.world().resource::<FloorState>().is_floor_recognized);
}
