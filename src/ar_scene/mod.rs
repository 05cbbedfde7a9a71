pub mod face_textures;
pub mod meshes;
pub mod plugin;
pub mod session;
pub mod systems;
pub mod throw_control;
pub mod types;

pub use face_textures::*;
pub use hit_test::*;
pub use meshes::*;
pub use plugin::*;
pub use session::*;
pub use systems::*;
pub use throw_control::*;
pub use types::*;
