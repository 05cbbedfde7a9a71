//! Throw Control State
//!
//! Contains the random spin sampling and the throw parameters.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rand::Rng;

use crate::ar_scene::types::DemoSettings;

/// Spin components are drawn from `{1, 2, ..., SPIN_STEPS} / SPIN_STEPS`
pub const SPIN_STEPS: u32 = 10;

/// One spin component in `[0.1, 1.0]`, quantized to tenths.
pub fn random_spin_value(rng: &mut impl Rng) -> f32 {
    (rng.gen_range(0..SPIN_STEPS) + 1) as f32 / SPIN_STEPS as f32
}

/// A rotation impulse packed as axis (x, y, z) and magnitude (w)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinImpulse {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl SpinImpulse {
    /// Four independent draws from `random_spin_value`
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            x: random_spin_value(rng),
            y: random_spin_value(rng),
            z: random_spin_value(rng),
            w: random_spin_value(rng),
        }
    }

    pub fn components(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    pub fn axis(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z).normalize_or_zero()
    }

    /// Torque vector: the normalized axis scaled by the magnitude
    pub fn torque(&self) -> Vec3 {
        self.axis() * self.w
    }
}

/// Held on the die while its spin torque is being applied
#[derive(Component, Debug)]
pub struct ThrowTorque {
    pub timer: Timer,
}

impl ThrowTorque {
    pub fn new(duration_secs: f32) -> Self {
        Self {
            timer: Timer::from_seconds(duration_secs, TimerMode::Once),
        }
    }
}

/// Tuning for a single throw, taken from `DemoSettings`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrowParams {
    pub spawn_height_offset: f32,
    pub throw_impulse: f32,
    pub torque_duration_secs: f32,
}

impl ThrowParams {
    pub fn from_settings(settings: &DemoSettings) -> Self {
        Self {
            spawn_height_offset: settings.spawn_height_offset,
            throw_impulse: settings.throw_impulse,
            torque_duration_secs: settings.torque_duration_secs,
        }
    }

    /// Where the die is dropped for a tap that hit `hit_point`
    pub fn spawn_position(&self, hit_point: Vec3) -> Vec3 {
        Vec3::new(
            hit_point.x,
            hit_point.y + self.spawn_height_offset,
            hit_point.z,
        )
    }

    pub fn upward_impulse(&self) -> Vec3 {
        Vec3::new(0.0, self.throw_impulse, 0.0)
    }
}

impl Default for ThrowParams {
    fn default() -> Self {
        Self::from_settings(&DemoSettings::default())
    }
}

/// Drop every force, impulse and velocity left over from a previous throw.
pub fn clear_all_forces(
    velocity: &mut Velocity,
    force: &mut ExternalForce,
    impulse: &mut ExternalImpulse,
) {
    *velocity = Velocity::zero();
    *force = ExternalForce::default();
    *impulse = ExternalImpulse::default();
}
