//! Dice-related types and components
//!
//! This module contains the `Die` component, its six faces in material
//! order, and whether the die is currently part of the scene.

use bevy::prelude::*;
use std::f32::consts::{FRAC_PI_2, PI};

/// Component attached to the single die entity
#[derive(Component, Debug, Clone, Copy)]
pub struct Die {
    pub edge_length: f32,
}

/// Whether the die currently takes part in the scene.
///
/// A detached die is hidden and its rigid body is disabled. The die starts
/// detached and is attached by the first successful tap.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DieState {
    pub attached: bool,
}

/// Marker on each face child of the die
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DieFaceMarker(pub DieFace);

/// The six faces of the cube in material order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DieFace {
    Front,
    Right,
    Back,
    Left,
    Top,
    Bottom,
}

impl DieFace {
    pub const ALL: [DieFace; 6] = [
        DieFace::Front,
        DieFace::Right,
        DieFace::Back,
        DieFace::Left,
        DieFace::Top,
        DieFace::Bottom,
    ];

    pub fn index(&self) -> usize {
        match self {
            DieFace::Front => 0,
            DieFace::Right => 1,
            DieFace::Back => 2,
            DieFace::Left => 3,
            DieFace::Top => 4,
            DieFace::Bottom => 5,
        }
    }

    /// Pip count drawn on this face (material `i` shows `i + 1` pips)
    pub fn pips(&self) -> u32 {
        self.index() as u32 + 1
    }

    /// Outward normal in die-local space
    pub fn normal(&self) -> Vec3 {
        match self {
            DieFace::Front => Vec3::Z,
            DieFace::Right => Vec3::X,
            DieFace::Back => Vec3::NEG_Z,
            DieFace::Left => Vec3::NEG_X,
            DieFace::Top => Vec3::Y,
            DieFace::Bottom => Vec3::NEG_Y,
        }
    }

    /// Rotation taking a +Z facing quad onto this face
    pub fn rotation(&self) -> Quat {
        match self {
            DieFace::Front => Quat::IDENTITY,
            DieFace::Right => Quat::from_rotation_y(FRAC_PI_2),
            DieFace::Back => Quat::from_rotation_y(PI),
            DieFace::Left => Quat::from_rotation_y(-FRAC_PI_2),
            DieFace::Top => Quat::from_rotation_x(-FRAC_PI_2),
            DieFace::Bottom => Quat::from_rotation_x(FRAC_PI_2),
        }
    }
}
