use std::io;

use thiserror::Error;

use crate::world::WorldError;

/// Failures of the program itself. Bad player input is never one of these.
#[derive(Error, Debug)]
pub enum ZuulError {
    #[error("could not build the world: {0}")]
    World(#[from] WorldError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ZuulError>;
