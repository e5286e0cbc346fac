use std::io::{self, BufRead};

use tracing::debug;

use super::command::{Command, CommandWord};

/// Splits a line into at most two tokens and checks the first against the
/// vocabulary. Tokens past the second are dropped.
pub fn parse_line(line: &str) -> Command {
    let mut tokens = line.split_whitespace();
    let word = tokens.next().and_then(CommandWord::from_token);
    let second = tokens.next().map(str::to_string);
    Command::new(word, second)
}

/// Reads commands line by line from any buffered source.
pub struct Parser<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> Parser<R> {
    pub fn new(reader: R) -> Self {
        Parser {
            reader,
            line: String::new(),
        }
    }

    /// Blocks for the next line. `Ok(None)` means the input is exhausted.
    pub fn next_command(&mut self) -> io::Result<Option<Command>> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            debug!("end of input");
            return Ok(None);
        }

        let command = parse_line(&self.line);
        debug!(input = %self.line.trim_end(), ?command, "parsed command");
        Ok(Some(command))
    }
}
