mod error;
mod loader;
mod model;
mod validator;

pub use error::WorldError;
pub use loader::{default_world, load_world_from_str};

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use model::{Item, Room, RoomId, World};
pub use validator::{ValidationError, unreachable_rooms, validate_world};
