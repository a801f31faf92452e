//! Map parsing: turns a textual board into a populated [`Game`].
//!
//! The parser only understands the text format; what actually gets created for each
//! symbol is up to the [`GameFactory`] it is given.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::entity::{EntityId, Food, Player, Sprite};
use crate::error::{AssetError, GameError, GameResult, ParseError};
use crate::game::points::PointManager;
use crate::game::Game;
use crate::map::board::Board;

/// A single character of the map format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapTile {
    Player,
    Ghost,
    Food,
    Wall,
    Empty,
}

impl MapTile {
    pub const PLAYER: char = 'P';
    pub const GHOST: char = 'G';
    pub const FOOD: char = '.';
    pub const WALL: char = '#';
    pub const EMPTY: char = ' ';

    /// Parses a single map character, or `None` if the character has no meaning.
    pub fn from_char(c: char) -> Option<MapTile> {
        match c {
            Self::PLAYER => Some(MapTile::Player),
            Self::GHOST => Some(MapTile::Ghost),
            Self::FOOD => Some(MapTile::Food),
            Self::WALL => Some(MapTile::Wall),
            Self::EMPTY => Some(MapTile::Empty),
            _ => None,
        }
    }
}

/// Creates the sprites making up a game (an abstract factory).
///
/// The parser calls [`make_board`](GameFactory::make_board) once, then one `make_*`
/// per non-empty map character, and finally [`make_game`](GameFactory::make_game) to
/// assemble the result. Sprites are returned detached; the parser places them.
pub trait GameFactory {
    /// Create a new board of the given size.
    fn make_board(&mut self, width: usize, height: usize) -> Board {
        Board::new(width, height)
    }

    fn make_player(&mut self, board: &mut Board) -> EntityId;

    fn make_ghost(&mut self, board: &mut Board) -> EntityId;

    fn make_food(&mut self, board: &mut Board) -> EntityId;

    fn make_wall(&mut self, board: &mut Board) -> EntityId;

    /// Assemble the game once every sprite is on the board.
    fn make_game(self, board: Board) -> GameResult<Game>;
}

/// The factory used unless told otherwise: plain sprites, food worth
/// [`Food::DEFAULT_POINTS`] each, every piece of food counted towards the total.
#[derive(Debug, Clone, Default)]
pub struct DefaultGameFactory {
    player: Option<EntityId>,
    ghosts: Vec<EntityId>,
    points: PointManager,
}

impl GameFactory for DefaultGameFactory {
    fn make_player(&mut self, board: &mut Board) -> EntityId {
        let id = board.spawn(Sprite::Player(Player::new()));
        self.player = Some(id);
        id
    }

    fn make_ghost(&mut self, board: &mut Board) -> EntityId {
        let id = board.spawn(Sprite::Ghost);
        self.ghosts.push(id);
        id
    }

    fn make_food(&mut self, board: &mut Board) -> EntityId {
        let food = Food::default();
        self.points.add_points_to_board(food.points);
        board.spawn(Sprite::Food(food))
    }

    fn make_wall(&mut self, board: &mut Board) -> EntityId {
        board.spawn(Sprite::Wall)
    }

    fn make_game(self, board: Board) -> GameResult<Game> {
        let player = self.player.ok_or(ParseError::MissingPlayer)?;
        Game::from_parts(board, player, self.ghosts, self.points)
    }
}

/// Turns a textual ASCII board into an actual game.
pub struct MapParser<F: GameFactory = DefaultGameFactory> {
    factory: F,
}

impl Default for MapParser<DefaultGameFactory> {
    fn default() -> Self {
        Self::new(DefaultGameFactory::default())
    }
}

impl<F: GameFactory> MapParser<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Parses a rectangular list of rows into a game.
    ///
    /// # Errors
    ///
    /// Fails on an empty map, a zero-width or ragged row, an unknown character, or a
    /// map without exactly one player. Nothing is returned in those cases.
    pub fn parse_map<S: AsRef<str>>(mut self, rows: &[S]) -> GameResult<Game> {
        let height = rows.len();
        if height == 0 {
            return Err(ParseError::EmptyMap.into());
        }

        let width = rows[0].as_ref().chars().count();
        if width == 0 {
            return Err(ParseError::EmptyRow.into());
        }

        // Validate the whole map before asking the factory for anything.
        let mut player_seen = false;
        let mut layout = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(ParseError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                }
                .into());
            }

            for (x, code) in row.chars().enumerate() {
                let tile = MapTile::from_char(code).ok_or(ParseError::UnknownCharacter { code, x, y })?;
                if tile == MapTile::Player {
                    if player_seen {
                        return Err(ParseError::DuplicatePlayer { x, y }.into());
                    }
                    player_seen = true;
                }
                layout.push((x, y, tile));
            }
        }
        if !player_seen {
            return Err(ParseError::MissingPlayer.into());
        }

        let mut board = self.factory.make_board(width, height);
        for (x, y, tile) in layout {
            let sprite = match tile {
                MapTile::Player => self.factory.make_player(&mut board),
                MapTile::Ghost => self.factory.make_ghost(&mut board),
                MapTile::Food => self.factory.make_food(&mut board),
                MapTile::Wall => self.factory.make_wall(&mut board),
                MapTile::Empty => continue,
            };
            board.place(sprite, x as i32, y as i32)?;
        }

        debug!(width, height, "Parsed map");
        self.factory.make_game(board)
    }

    /// Parses a map given as one string, one row per line.
    pub fn parse_str(self, map: &str) -> GameResult<Game> {
        let rows: Vec<&str> = map.lines().collect();
        self.parse_map(&rows)
    }

    /// Parses a map provided line by line by `reader`.
    pub fn parse_reader<R: BufRead>(self, reader: R) -> GameResult<Game> {
        let rows = reader.lines().collect::<io::Result<Vec<String>>>().map_err(AssetError::Io)?;
        self.parse_map(&rows)
    }

    /// Parses the map stored in the file at `path`.
    pub fn parse_file(self, path: impl AsRef<Path>) -> GameResult<Game> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|error| match error.kind() {
            io::ErrorKind::NotFound => GameError::Asset(AssetError::NotFound(path.to_path_buf())),
            _ => GameError::Asset(AssetError::Io(error)),
        })?;
        debug!(path = %path.display(), "Reading map file");
        self.parse_reader(BufReader::new(file))
    }
}
