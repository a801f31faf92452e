use std::collections::HashMap;

use crate::entity::Direction;
use crate::input::commands::GameCommand;

pub mod commands;

/// Maps the words typed on the console to commands.
#[derive(Debug, Clone)]
pub struct Bindings {
    word_bindings: HashMap<&'static str, GameCommand>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut word_bindings = HashMap::new();

        // Player movement
        word_bindings.insert("up", GameCommand::MovePlayer(Direction::Up));
        word_bindings.insert("down", GameCommand::MovePlayer(Direction::Down));
        word_bindings.insert("left", GameCommand::MovePlayer(Direction::Left));
        word_bindings.insert("right", GameCommand::MovePlayer(Direction::Right));

        // Match actions
        word_bindings.insert("start", GameCommand::Start);
        word_bindings.insert("stop", GameCommand::Stop);
        word_bindings.insert("pause", GameCommand::Stop);
        word_bindings.insert("quit", GameCommand::Exit);
        word_bindings.insert("exit", GameCommand::Exit);

        Self { word_bindings }
    }
}

impl Bindings {
    /// The command for one line of input, if it names one.
    ///
    /// Single letters `w`, `a`, `s` and `d` move the player; anything else is looked up
    /// as a whole word, ignoring case and surrounding whitespace.
    pub fn command_for(&self, line: &str) -> Option<GameCommand> {
        let line = line.trim().to_ascii_lowercase();
        let mut chars = line.chars();
        if let (Some(key), None) = (chars.next(), chars.next()) {
            if let Some(direction) = Direction::from_key(key) {
                return Some(GameCommand::MovePlayer(direction));
            }
            if key == 'q' {
                return Some(GameCommand::Exit);
            }
        }
        self.word_bindings.get(line.as_str()).copied()
    }
}
