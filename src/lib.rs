//! AR Dice
//!
//! Detect a horizontal plane, lay a dark floor on it, and tap to throw a
//! physics-simulated die onto it. Plane tracking is provided by a simulated
//! AR session; rendering and physics are Bevy and Rapier.

pub mod ar_scene;
