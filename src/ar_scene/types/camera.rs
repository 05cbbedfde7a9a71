//! Camera-related types and components
//!
//! This module contains the main camera marker component.

use bevy::prelude::*;

/// Marker component for the camera standing in for the device's view
#[derive(Component)]
pub struct MainCamera;
