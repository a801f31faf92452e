use std::path::{Path, PathBuf};

use tracing::info;

use crate::constants::DEFAULT_BOARD;
use crate::error::GameResult;
use crate::game::Game;
use crate::map::parser::{DefaultGameFactory, GameFactory, MapParser};

/// A level: which map to read and which factory builds its sprites.
///
/// Without a map file the built-in [`DEFAULT_BOARD`] is used.
#[derive(Debug, Clone, Default)]
pub struct Level<F: GameFactory + Clone = DefaultGameFactory> {
    factory: F,
    map_file: Option<PathBuf>,
}

impl Level<DefaultGameFactory> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: GameFactory + Clone> Level<F> {
    /// A level whose sprites are made by `factory`.
    pub fn with_factory(factory: F) -> Self {
        Self { factory, map_file: None }
    }

    /// Provide the name of the map file to be read.
    pub fn set_map_file(&mut self, path: impl Into<PathBuf>) {
        self.map_file = Some(path.into());
    }

    pub fn map_file(&self) -> Option<&Path> {
        self.map_file.as_deref()
    }

    /// Parses the level's map into a fresh game.
    pub fn parse_map(&self) -> GameResult<Game> {
        let parser = MapParser::new(self.factory.clone());
        match &self.map_file {
            Some(path) => {
                info!(path = %path.display(), "Loading level from file");
                parser.parse_file(path)
            }
            None => {
                info!("Loading built-in level");
                parser.parse_map(&DEFAULT_BOARD)
            }
        }
    }
}
