//! Throw Control Module
//!
//! This module turns a tap on a recognized plane into a die throw:
//! forces are cleared, the die is dropped above the tapped point with a
//! random spin, and pushed upward with a small impulse.

mod state;
mod systems;

pub use state::*;
pub use systems::*;
