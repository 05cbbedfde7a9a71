//! Systems module for the AR dice scene
//!
//! - `setup`: Scene initialization (camera, light) and the die
//! - `floor`: Floor placement on the first detected plane
//! - `input`: Mouse/touch taps turned into world rays
//! - `camera`: Keyboard control of the viewing camera

mod camera;
mod floor;
mod input;
mod setup;

pub use camera::move_camera;
pub use floor::{on_plane_detected, DEFAULT_FLOOR_COLOR};
pub use input::{emit_tap_input, resolve_tap_rays};
pub use setup::{face_texture_handles, init_dice, setup_scene};
