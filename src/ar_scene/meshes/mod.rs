pub mod die;
pub mod floor;

pub use die::{create_die_collider, create_face_mesh, face_offset};
pub use floor::{create_floor, FloorGeometry};
