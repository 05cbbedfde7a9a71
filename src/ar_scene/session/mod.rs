//! Simulated AR Session
//!
//! Stands in for device tracking: planes from the settings script are
//! "detected" once enough tracking time has passed, and a cloud of debug
//! feature points is shown until the floor is recognized. The session only
//! tracks while the window has focus.

mod state;
mod systems;

pub use state::*;
pub use systems::*;
