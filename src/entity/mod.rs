//! Sprites: everything that can be placed on a board tile.
//!
//! Sprites live in an arena owned by the [`Board`](crate::map::board::Board) and are
//! addressed by [`EntityId`]. The tile a sprite occupies is stored on the sprite as a
//! plain coordinate; the tile stores the ids in stacking order. Only
//! [`Board::occupy`](crate::map::board::Board::occupy) and
//! [`Board::deoccupy`](crate::map::board::Board::deoccupy) touch either side.

use std::fmt;

use glam::IVec2;
use strum_macros::{AsRefStr, EnumIter};

pub mod direction;
pub mod player;

pub use direction::Direction;
pub use player::Player;

/// Handle to a sprite stored in the board's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub(crate) u32);

impl EntityId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The predefined set of sprite kinds, as seen by inspectors.
///
/// `Empty` is never the kind of a sprite; it is what an unoccupied tile reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum SpriteKind {
    Player,
    Ghost,
    Food,
    Empty,
    Wall,
    Other,
}

/// A piece of food, worth some points when the player eats it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub points: u32,
}

impl Food {
    /// The default number of points if food gets eaten.
    pub const DEFAULT_POINTS: u32 = 10;

    pub fn new(points: u32) -> Self {
        Self { points }
    }
}

impl Default for Food {
    fn default() -> Self {
        Self::new(Self::DEFAULT_POINTS)
    }
}

/// The kind-specific payload of a sprite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sprite {
    Player(Player),
    Ghost,
    Food(Food),
    Wall,
    Other,
}

impl Sprite {
    pub fn kind(&self) -> SpriteKind {
        match self {
            Sprite::Player(_) => SpriteKind::Player,
            Sprite::Ghost => SpriteKind::Ghost,
            Sprite::Food(_) => SpriteKind::Food,
            Sprite::Wall => SpriteKind::Wall,
            Sprite::Other => SpriteKind::Other,
        }
    }

    pub fn as_player(&self) -> Option<&Player> {
        match self {
            Sprite::Player(player) => Some(player),
            _ => None,
        }
    }

    pub fn as_player_mut(&mut self) -> Option<&mut Player> {
        match self {
            Sprite::Player(player) => Some(player),
            _ => None,
        }
    }

    /// Points this sprite is worth when eaten; only food has any.
    pub fn points(&self) -> Option<u32> {
        match self {
            Sprite::Food(food) => Some(food.points),
            _ => None,
        }
    }
}

/// A sprite together with the tile it currently occupies, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub(crate) sprite: Sprite,
    pub(crate) tile: Option<IVec2>,
}

impl Entity {
    pub(crate) fn new(sprite: Sprite) -> Self {
        Self { sprite, tile: None }
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn kind(&self) -> SpriteKind {
        self.sprite.kind()
    }

    /// Coordinates of the occupied tile, or `None` while detached.
    pub fn tile(&self) -> Option<IVec2> {
        self.tile
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tile {
            Some(tile) => write!(f, "{} occupying [{},{}]", self.kind().as_ref(), tile.x, tile.y),
            None => write!(f, "{} occupying nothing", self.kind().as_ref()),
        }
    }
}
