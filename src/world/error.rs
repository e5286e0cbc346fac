//! Errors raised while turning a world definition into a [`World`](super::World).

use thiserror::Error;

use super::validator::ValidationError;

#[derive(Error, Debug)]
pub enum WorldError {
    #[error("invalid world definition: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("world.{0} may not be empty")]
    EmptyField(&'static str),

    #[error("duplicate room id: {0}")]
    DuplicateRoom(String),

    #[error("start_room '{0}' not found among rooms")]
    UnknownStartRoom(String),

    #[error("room '{room}' exit '{direction}' targets missing room '{target}'")]
    UnknownExitTarget {
        room: String,
        direction: String,
        target: String,
    },

    #[error("item '{item}' placed in missing room '{room}'")]
    UnknownItemRoom { item: String, room: String },

    #[error("world failed validation: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<&str>>()
        .join("; ")
}
