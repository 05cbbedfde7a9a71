//! Session State
//!
//! Contains the `ArSession` resource: run/pause lifecycle, tracking time and
//! which scripted planes have already been reported.

use bevy::prelude::*;
use rand::Rng;

use crate::ar_scene::types::{DemoSettings, PlaneAnchor, ScriptedPlane};

/// Feature points scatter this far past a plane's edges
const FEATURE_POINT_MARGIN: f32 = 0.15;
/// Vertical noise of feature points around a plane
const FEATURE_POINT_JITTER: f32 = 0.01;

#[derive(Resource, Debug, Clone)]
pub struct ArSession {
    running: bool,
    tracking_time: f32,
    planes: Vec<ScriptedPlane>,
    detected: Vec<bool>,
    feature_points: Vec<Vec3>,
}

impl ArSession {
    /// A paused session over the given plane script.
    pub fn new(planes: Vec<ScriptedPlane>, feature_points: Vec<Vec3>) -> Self {
        let detected = vec![false; planes.len()];
        Self {
            running: false,
            tracking_time: 0.0,
            planes,
            detected,
            feature_points,
        }
    }

    pub fn from_settings(settings: &DemoSettings, rng: &mut impl Rng) -> Self {
        let points = generate_feature_points(&settings.planes, settings.feature_point_count, rng);
        Self::new(settings.planes.clone(), points)
    }

    pub fn run(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn tracking_time(&self) -> f32 {
        self.tracking_time
    }

    pub fn feature_points(&self) -> &[Vec3] {
        &self.feature_points
    }

    /// Advance tracking by `delta_secs` and return the indices of planes
    /// detected during this step, in script order. Each plane is reported
    /// once. A paused session neither advances nor detects.
    pub fn advance(&mut self, delta_secs: f32) -> Vec<usize> {
        if !self.running {
            return Vec::new();
        }

        self.tracking_time += delta_secs;

        let mut newly_detected = Vec::new();
        for (index, plane) in self.planes.iter().enumerate() {
            if !self.detected[index] && self.tracking_time >= plane.detect_after_secs {
                self.detected[index] = true;
                newly_detected.push(index);
            }
        }
        newly_detected
    }

    /// Anchor component and world transform for a scripted plane.
    pub fn anchor_for(&self, index: usize) -> Option<(PlaneAnchor, Transform)> {
        let plane = self.planes.get(index)?;
        let anchor = PlaneAnchor {
            id: index as u32,
            center: plane.center(),
            extent: plane.extent(),
        };
        Some((anchor, plane.anchor_transform()))
    }
}

impl FromWorld for ArSession {
    fn from_world(world: &mut World) -> Self {
        let settings = world
            .get_resource::<DemoSettings>()
            .cloned()
            .unwrap_or_default();
        Self::from_settings(&settings, &mut rand::thread_rng())
    }
}

/// Scatter `count` feature points over and around the scripted planes.
pub fn generate_feature_points(
    planes: &[ScriptedPlane],
    count: usize,
    rng: &mut impl Rng,
) -> Vec<Vec3> {
    if planes.is_empty() {
        return Vec::new();
    }

    (0..count)
        .map(|i| {
            let plane = &planes[i % planes.len()];
            let half_x = plane.extent[0] * 0.5 + FEATURE_POINT_MARGIN;
            let half_z = plane.extent[1] * 0.5 + FEATURE_POINT_MARGIN;
            let local = Vec3::new(
                plane.center[0] + rng.gen_range(-half_x..=half_x),
                rng.gen_range(-FEATURE_POINT_JITTER..=FEATURE_POINT_JITTER),
                plane.center[1] + rng.gen_range(-half_z..=half_z),
            );
            plane.anchor_transform().transform_point(local)
        })
        .collect()
}
