pub mod engine;
pub mod error;
pub mod world;

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use engine::{
    Command, CommandWord, Movement, Output, Parser, parse_line, render_room, resolve_movement,
    show_commands,
};
use world::{RoomId, World};

pub use error::{Result, ZuulError};
pub use world::{default_world, load_world_from_str};

pub const PROMPT: &str = "> ";
pub const FAREWELL: &str = "Thank you for playing.  Good bye.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Finished,
}

/// One play session: the world plus where the player stands in it.
pub struct Game {
    world: World,
    current_room: RoomId,
    status: GameStatus,
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmStepResult {
        blocks: Vec<engine::OutputBlock>,
        quit: bool,
    }

    #[wasm_bindgen]
    pub struct WasmGame {
        game: Game,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Create a new game on the built-in map. Call `init()` to get the welcome.
        #[wasm_bindgen(constructor)]
        pub fn new() -> std::result::Result<WasmGame, JsValue> {
            let world = default_world().map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(WasmGame {
                game: Game::new(world),
            })
        }

        /// Return the welcome banner and starting room.
        #[wasm_bindgen]
        pub fn init(&self) -> JsValue {
            to_value(&WasmStepResult {
                blocks: self.game.welcome().blocks,
                quit: false,
            })
            .unwrap_or(JsValue::NULL)
        }

        /// Process a player command and return the resulting output blocks and quit flag.
        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> JsValue {
            let (out, quit) = self.game.step(input);
            to_value(&WasmStepResult {
                blocks: out.blocks,
                quit,
            })
            .unwrap_or(JsValue::NULL)
        }
    }
}

impl Game {
    pub fn new(world: World) -> Self {
        let current_room = world.start_room();
        Game {
            world,
            current_room,
            status: GameStatus::Running,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn current_room(&self) -> RoomId {
        self.current_room
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    pub fn welcome(&self) -> Output {
        let mut out = Output::new();
        out.blank();
        out.say(format!("Welcome to the {}!", self.world.name));
        out.say(self.world.tagline.as_str());
        out.say("Type 'help' if you need help.");
        out.blank();
        render_room(&mut out, self.world.room(self.current_room));
        out.blank();
        out
    }

    pub fn farewell() -> Output {
        let mut out = Output::new();
        out.say(FAREWELL);
        out
    }

    /// Process a single player input; returns (output, finished?).
    /// Once finished, further input produces no output.
    pub fn step(&mut self, input: &str) -> (Output, bool) {
        if self.is_finished() {
            return (Output::new(), true);
        }

        let mut out = self.process_command(&parse_line(input));
        if self.is_finished() {
            out.append(Self::farewell());
        }
        (out, self.is_finished())
    }

    pub fn process_command(&mut self, command: &Command) -> Output {
        let mut out = Output::new();
        if self.is_finished() {
            debug!(?command, "game finished, ignoring command");
            return out;
        }

        match command.command_word() {
            None => out.say("I don't know what you mean..."),
            Some(CommandWord::Help) => self.print_help(&mut out),
            Some(CommandWord::Go) => self.go_room(&mut out, command.second_word()),
            Some(CommandWord::Quit) => self.quit(&mut out, command),
            Some(CommandWord::Look) => render_room(&mut out, self.world.room(self.current_room)),
        }

        out
    }

    fn print_help(&self, out: &mut Output) {
        out.say(self.world.help_text.as_str());
        out.blank();
        out.say("Your command words are:");
        out.say(format!("   {}", show_commands()));
    }

    fn go_room(&mut self, out: &mut Output, direction: Option<&str>) {
        match resolve_movement(&self.world, self.current_room, direction) {
            Movement::NoDirection => out.say("Go where?"),
            Movement::NoDoor => out.say("There is no door!"),
            Movement::Moved(next) => {
                self.current_room = next;
                let room = self.world.room(next);
                info!(room = %room.key, "player moved");
                render_room(out, room);
                out.blank();
            }
        }
    }

    fn quit(&mut self, out: &mut Output, command: &Command) {
        if command.has_second_word() {
            out.say("Quit what?");
        } else {
            info!("player quit");
            self.status = GameStatus::Finished;
        }
    }
}

/// Runs the read/eval loop until the game is finished or input runs out,
/// then writes the farewell line.
pub fn play<R: BufRead, W: Write>(
    game: &mut Game,
    parser: &mut Parser<R>,
    writer: &mut W,
) -> io::Result<()> {
    write!(writer, "{}", game.welcome())?;

    while !game.is_finished() {
        write!(writer, "{PROMPT}")?;
        writer.flush()?;

        let Some(command) = parser.next_command()? else {
            // End of input ends the session like a confirmed quit.
            debug!("no more input, finishing game");
            writeln!(writer)?;
            break;
        };

        write!(writer, "{}", game.process_command(&command))?;
    }

    write!(writer, "{}", Game::farewell())?;
    writer.flush()
}
