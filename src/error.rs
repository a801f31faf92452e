//! Centralized error types for the game.
//!
//! Load-time problems (bad maps, missing files, bad configuration) and contract
//! violations against the board (out-of-range coordinates, double placement) each
//! get their own enum; everything funnels into [`GameError`] for public APIs.
//!
//! Expected gameplay outcomes such as walking into a wall are *not* errors; see
//! [`crate::game::MoveOutcome`].

use std::io;
use std::path::PathBuf;

use crate::entity::EntityId;

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("Board error: {0}")]
    Board(#[from] BoardError),

    #[error("Entity error: {0}")]
    Entity(#[from] EntityError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Errors raised while reading a map resource.
#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Map file not found: {}", .0.display())]
    NotFound(PathBuf),
}

/// Error type for map parsing operations.
///
/// Any of these aborts construction of the game; no partially built board is returned.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty map encountered")]
    EmptyMap,
    #[error("Empty row encountered")]
    EmptyRow,
    #[error("Row {row} has incorrect length {found}, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("Illegal sprite code {code:?} at ({x}, {y})")]
    UnknownCharacter { code: char, x: usize, y: usize },
    #[error("Map contains no player")]
    MissingPlayer,
    #[error("Map contains more than one player, second one at ({x}, {y})")]
    DuplicatePlayer { x: usize, y: usize },
}

/// Contract violations against the board's coordinate space.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("({x}, {y}) not on board of size {width} * {height}")]
    OutOfBounds { x: i32, y: i32, width: i32, height: i32 },
}

/// Contract violations against the tile/entity association.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum EntityError {
    #[error("Entity not found: {0}")]
    NotFound(EntityId),

    #[error("Entity {0} already occupies a tile")]
    AlreadyPlaced(EntityId),

    #[error("Entity {0} does not occupy any tile")]
    NotPlaced(EntityId),

    #[error("Entity {0} is not a player")]
    NotAPlayer(EntityId),

    #[error("Entity {0} is not a ghost")]
    NotAGhost(EntityId),
}

/// Errors related to loading configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Figment(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::Figment(Box::new(error))
    }
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
