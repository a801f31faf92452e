use std::fmt;

use glam::IVec2;
use smallvec::SmallVec;

use crate::entity::EntityId;

/// A single board cell: fixed coordinates plus the sprites standing on it.
///
/// Occupants are kept in insertion order; the last one is on top, which is the one
/// that gets drawn and the one a mover interacts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    position: IVec2,
    sprites: SmallVec<[EntityId; 2]>,
}

impl Tile {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            position: IVec2::new(x, y),
            sprites: SmallVec::new(),
        }
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    /// The most recently added, hence visible, sprite.
    pub fn top(&self) -> Option<EntityId> {
        self.sprites.last().copied()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.sprites.contains(&id)
    }

    /// All occupants, bottom to top.
    pub fn sprites(&self) -> &[EntityId] {
        &self.sprites
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub(crate) fn add(&mut self, id: EntityId) {
        debug_assert!(!self.contains(id), "sprite {id} already on tile {self}");
        self.sprites.push(id);
    }

    pub(crate) fn drop_sprite(&mut self, id: EntityId) {
        self.sprites.retain(|occupant| *occupant != id);
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.position.x, self.position.y)
    }
}
