mod command;
mod movement;
mod output;
mod parser;
mod render;

pub use command::{Command, CommandWord, show_commands};
pub use movement::{Movement, resolve_movement};
pub use output::{Output, OutputBlock};
pub use parser::{Parser, parse_line};
pub use render::render_room;
