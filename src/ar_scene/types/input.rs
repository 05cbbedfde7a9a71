//! Tap messages
//!
//! Input is turned into a `TapInput` (view-local point), then into a
//! `TapRay` (world ray through that point) before the throw systems see it.

use bevy::prelude::*;

/// A tap at a point in view-local 2D space (logical pixels, origin top-left)
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct TapInput {
    pub screen_point: Vec2,
}

/// A tap resolved into a world-space ray from the main camera
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct TapRay {
    pub ray: Ray3d,
}
