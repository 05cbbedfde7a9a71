//! Demo settings and persistence
//!
//! This module handles loading settings from a RON file, validating them,
//! and turning them back into RON for `--print-settings`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of textured faces a die needs
pub const FACE_TEXTURE_COUNT: usize = 6;

/// Upper bound on generated debug feature points
pub const MAX_FEATURE_POINTS: usize = 10_000;

/// A plane the simulated session will "detect" once tracking time passes
/// `detect_after_secs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptedPlane {
    /// Anchor origin in world space
    #[serde(default)]
    pub origin: [f32; 3],

    /// Rotation of the anchor about the world up axis
    #[serde(default)]
    pub yaw_degrees: f32,

    /// Plane center (x, z) relative to the anchor
    #[serde(default)]
    pub center: [f32; 2],

    /// Plane extent (x, z)
    pub extent: [f32; 2],

    #[serde(default)]
    pub detect_after_secs: f32,
}

impl ScriptedPlane {
    pub fn anchor_transform(&self) -> Transform {
        Transform::from_xyz(self.origin[0], self.origin[1], self.origin[2])
            .with_rotation(Quat::from_rotation_y(self.yaw_degrees.to_radians()))
    }

    pub fn center(&self) -> Vec3 {
        Vec3::new(self.center[0], 0.0, self.center[1])
    }

    pub fn extent(&self) -> Vec3 {
        Vec3::new(self.extent[0], 0.0, self.extent[1])
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.extent.iter().any(|e| !e.is_finite() || *e <= 0.0) {
            return Err("extent must be positive and finite".to_string());
        }
        let finite = self
            .origin
            .iter()
            .chain(self.center.iter())
            .chain([self.yaw_degrees, self.detect_after_secs].iter())
            .all(|v| v.is_finite());
        if !finite {
            return Err("origin, center, yaw_degrees and detect_after_secs must be finite".to_string());
        }
        if self.detect_after_secs < 0.0 {
            return Err("detect_after_secs must not be negative".to_string());
        }
        Ok(())
    }
}

fn default_planes() -> Vec<ScriptedPlane> {
    vec![
        // Table top in front of the camera.
        ScriptedPlane {
            origin: [0.0, 0.0, 0.0],
            yaw_degrees: 0.0,
            center: [0.0, 0.0],
            extent: [1.0, 1.0],
            detect_after_secs: 1.5,
        },
        // A smaller surface found later; it never gets a floor.
        ScriptedPlane {
            origin: [0.9, -0.3, -0.6],
            yaw_degrees: 20.0,
            center: [0.05, 0.0],
            extent: [0.5, 0.4],
            detect_after_secs: 4.0,
        },
    ]
}

fn default_die_length() -> f32 {
    0.04
}
fn default_die_mass() -> f32 {
    1.0
}
fn default_floor_thickness() -> f32 {
    0.03
}
fn default_floor_color() -> String {
    "rgba(0, 0, 0, 0.9)".to_string()
}
fn default_spawn_height_offset() -> f32 {
    0.2
}
fn default_throw_impulse() -> f32 {
    1.0
}
fn default_torque_duration_secs() -> f32 {
    1.0 / 60.0
}
fn default_feature_point_count() -> usize {
    300
}

/// Settings for the demo scene
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoSettings {
    /// Edge length of the die cube (meters)
    #[serde(default = "default_die_length")]
    pub die_length: f32,

    #[serde(default = "default_die_mass")]
    pub die_mass: f32,

    #[serde(default = "default_floor_thickness")]
    pub floor_thickness: f32,

    /// CSS colour string for the floor material
    #[serde(default = "default_floor_color")]
    pub floor_color: String,

    /// How far above the tapped point the die is dropped
    #[serde(default = "default_spawn_height_offset")]
    pub spawn_height_offset: f32,

    /// Magnitude of the upward impulse given on each throw
    #[serde(default = "default_throw_impulse")]
    pub throw_impulse: f32,

    /// How long the spin torque is held before it is cleared
    #[serde(default = "default_torque_duration_secs")]
    pub torque_duration_secs: f32,

    /// Asset paths for the six face textures, in face order. Generated pip
    /// textures are used when this is empty.
    #[serde(default)]
    pub face_textures: Vec<String>,

    #[serde(default = "default_feature_point_count")]
    pub feature_point_count: usize,

    #[serde(default = "default_planes")]
    pub planes: Vec<ScriptedPlane>,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            die_length: default_die_length(),
            die_mass: default_die_mass(),
            floor_thickness: default_floor_thickness(),
            floor_color: default_floor_color(),
            spawn_height_offset: default_spawn_height_offset(),
            throw_impulse: default_throw_impulse(),
            torque_duration_secs: default_torque_duration_secs(),
            face_textures: Vec::new(),
            feature_point_count: default_feature_point_count(),
            planes: default_planes(),
        }
    }
}

impl DemoSettings {
    /// Parse settings from RON text and validate them.
    pub fn from_ron_str(text: &str) -> Result<Self, String> {
        let settings: DemoSettings =
            ron::from_str(text).map_err(|e| format!("Invalid settings: {}", e))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a RON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let settings = Self::from_ron_str(&text)
            .map_err(|e| format!("{} ({})", e, path.display()))?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_ron_string(&self) -> Result<String, String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| format!("Failed to serialize settings: {}", e))
    }

    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("die_length", self.die_length),
            ("die_mass", self.die_mass),
            ("floor_thickness", self.floor_thickness),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{} must be positive and finite, got {}", name, value));
            }
        }
        let non_negative = [
            ("torque_duration_secs", self.torque_duration_secs),
            ("throw_impulse", self.throw_impulse),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(format!(
                    "{} must be finite and not negative, got {}",
                    name, value
                ));
            }
        }
        if !self.spawn_height_offset.is_finite() {
            return Err(format!(
                "spawn_height_offset must be finite, got {}",
                self.spawn_height_offset
            ));
        }
        if self.feature_point_count > MAX_FEATURE_POINTS {
            return Err(format!(
                "feature_point_count must be at most {}, got {}",
                MAX_FEATURE_POINTS, self.feature_point_count
            ));
        }
        if !self.face_textures.is_empty() && self.face_textures.len() != FACE_TEXTURE_COUNT {
            return Err(format!(
                "face_textures needs {} entries, got {}",
                FACE_TEXTURE_COUNT,
                self.face_textures.len()
            ));
        }
        for (i, plane) in self.planes.iter().enumerate() {
            plane.validate().map_err(|e| format!("planes[{}]: {}", i, e))?;
        }
        self.floor_color()?;
        Ok(())
    }

    pub fn floor_color(&self) -> Result<Color, String> {
        parse_css_color(&self.floor_color)
    }
}

/// Parse any CSS colour string into a Bevy colour.
pub fn parse_css_color(text: &str) -> Result<Color, String> {
    let [r, g, b, a] = csscolorparser::parse(text)
        .map_err(|e| format!("Invalid colour '{}': {}", text, e))?
        .to_array();
    Ok(Color::srgba(r as f32, g as f32, b as f32, a as f32))
}
