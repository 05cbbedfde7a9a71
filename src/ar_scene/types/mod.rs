//! Type definitions for the AR dice scene
//!
//! This module is organized into submodules:
//! - `camera` - Camera-related components
//! - `dice` - The die entity, its faces and attached state
//! - `input` - Tap messages flowing from input to the throw systems
//! - `plane` - Plane anchors, the floor and the recognition flag
//! - `settings` - Demo settings and RON persistence

pub mod camera;
pub mod dice;
pub mod input;
pub mod plane;
pub mod settings;

// Re-export all public types for convenient access
pub use camera::*;
pub use dice::*;
pub use input::*;
pub use plane::*;
pub use settings::*;
