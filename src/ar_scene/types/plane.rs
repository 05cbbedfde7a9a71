//! Plane anchors and the floor
//!
//! This module contains the detected-plane anchor component, the message
//! written when a plane is first detected, and the floor bookkeeping.

use bevy::prelude::*;

/// A horizontal plane recognized by the AR session.
///
/// The entity's `Transform` is the anchor's world transform. `center` and
/// `extent` are in anchor-local space; only their x and z are meaningful.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct PlaneAnchor {
    pub id: u32,
    pub center: Vec3,
    pub extent: Vec3,
}

impl PlaneAnchor {
    /// Whether an anchor-local point lies inside the plane's extent (XZ).
    pub fn contains_local(&self, local: Vec3) -> bool {
        (local.x - self.center.x).abs() <= self.extent.x * 0.5
            && (local.z - self.center.z).abs() <= self.extent.z * 0.5
    }
}

/// Written once per newly recognized plane anchor
#[derive(Message, Debug, Clone)]
pub struct PlaneAnchorAdded {
    pub entity: Entity,
    pub anchor: PlaneAnchor,
}

/// The static floor laid on the first detected plane
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Floor {
    /// Full box dimensions (width, thickness, length)
    pub size: Vec3,
}

/// Tracks whether the floor has been placed
#[derive(Resource, Debug, Default)]
pub struct FloorState {
    pub is_floor_recognized: bool,
    pub floor: Option<Entity>,
}

/// Debug visualization toggles
#[derive(Resource, Debug, Clone, Copy)]
pub struct DebugOverlay {
    pub show_feature_points: bool,
}

impl Default for DebugOverlay {
    fn default() -> Self {
        Self {
            show_feature_points: true,
        }
    }
}
