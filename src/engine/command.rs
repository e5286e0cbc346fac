/// The fixed vocabulary of command words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandWord {
    Help,
    Go,
    Quit,
    Look,
}

impl CommandWord {
    pub const ALL: [CommandWord; 4] = [
        CommandWord::Help,
        CommandWord::Go,
        CommandWord::Quit,
        CommandWord::Look,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CommandWord::Help => "help",
            CommandWord::Go => "go",
            CommandWord::Quit => "quit",
            CommandWord::Look => "look",
        }
    }

    /// Exact, case-sensitive match against the vocabulary.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.as_str() == token)
    }
}

/// All command words, space separated, for the help text.
pub fn show_commands() -> String {
    CommandWord::ALL
        .iter()
        .map(|w| w.as_str())
        .collect::<Vec<&str>>()
        .join(" ")
}

/// One parsed input line. A missing command word marks it as unknown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Command {
    word: Option<CommandWord>,
    second: Option<String>,
}

impl Command {
    pub fn new(word: Option<CommandWord>, second: Option<String>) -> Self {
        Command { word, second }
    }

    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn command_word(&self) -> Option<CommandWord> {
        self.word
    }

    pub fn second_word(&self) -> Option<&str> {
        self.second.as_deref()
    }

    pub fn is_unknown(&self) -> bool {
        self.word.is_none()
    }

    pub fn has_second_word(&self) -> bool {
        self.second.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_is_case_sensitive() {
        assert_eq!(CommandWord::from_token("go"), Some(CommandWord::Go));
        assert_eq!(CommandWord::from_token("look"), Some(CommandWord::Look));
        assert_eq!(CommandWord::from_token("GO"), None);
        assert_eq!(CommandWord::from_token("take"), None);
        assert_eq!(CommandWord::from_token(""), None);
    }

    #[test]
    fn show_commands_lists_vocabulary() {
        assert_eq!(show_commands(), "help go quit look");
    }

    #[test]
    fn accessors() {
        let cmd = Command::new(Some(CommandWord::Go), Some("north".to_string()));
        assert!(!cmd.is_unknown());
        assert!(cmd.has_second_word());
        assert_eq!(cmd.command_word(), Some(CommandWord::Go));
        assert_eq!(cmd.second_word(), Some("north"));

        let unknown = Command::unknown();
        assert!(unknown.is_unknown());
        assert!(!unknown.has_second_word());
    }
}
