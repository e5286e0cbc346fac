use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum OutputBlock {
    Text(String),
    Blank,
    Room(String),
}

#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn blank(&mut self) {
        self.blocks.push(OutputBlock::Blank);
    }

    pub fn room(&mut self, description: impl Into<String>) {
        self.blocks.push(OutputBlock::Room(description.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn append(&mut self, mut other: Output) {
        self.blocks.append(&mut other.blocks);
    }
}

/// Every block is written as one `println!`-style line.
impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            match block {
                OutputBlock::Text(line) => writeln!(f, "{line}")?,
                OutputBlock::Blank => writeln!(f)?,
                OutputBlock::Room(desc) => writeln!(f, "{desc}")?,
            }
        }
        Ok(())
    }
}
