//! The rectangular board holding the tiles and the sprites placed on them.

use glam::IVec2;
use tracing::trace;

use crate::entity::{Direction, Entity, EntityId, Sprite, SpriteKind};
use crate::error::{BoardError, EntityError, GameResult};
use crate::map::tile::Tile;

/// A fixed-size grid of tiles with toroidal ("tunnel") topology.
///
/// The board also owns the arena every sprite lives in. A sprite is created detached
/// via [`Board::spawn`] and only ever attached or detached through
/// [`Board::occupy`] / [`Board::deoccupy`], which keep the sprite's location and the
/// tile's occupant list in agreement.
#[derive(Debug, Clone)]
pub struct Board {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    entities: Vec<Entity>,
}

impl Board {
    /// Creates a board of `width * height` empty tiles.
    pub fn new(width: usize, height: usize) -> Self {
        let (width, height) = (width as i32, height as i32);
        let tiles = (0..height)
            .flat_map(|y| (0..width).map(move |x| Tile::new(x, y)))
            .collect();

        let board = Self {
            width,
            height,
            tiles,
            entities: Vec::new(),
        };
        debug_assert!(board.tile_invariant(), "every tile must sit at its own coordinates");
        board
    }

    fn tile_invariant(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(index, tile)| self.index_of(tile.x(), tile.y()) == index)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// True iff `(x, y)` falls within the board.
    pub fn within_borders(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    fn index_of(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    fn check_borders(&self, x: i32, y: i32) -> Result<(), BoardError> {
        if self.within_borders(x, y) {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// The tile at `(x, y)`.
    pub fn tile_at(&self, x: i32, y: i32) -> Result<&Tile, BoardError> {
        self.check_borders(x, y)?;
        Ok(&self.tiles[self.index_of(x, y)])
    }

    fn tile_at_mut(&mut self, x: i32, y: i32) -> Result<&mut Tile, BoardError> {
        self.check_borders(x, y)?;
        let index = self.index_of(x, y);
        Ok(&mut self.tiles[index])
    }

    /// All tiles, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// The topmost sprite at `(x, y)`, if the tile is occupied.
    pub fn sprite_at(&self, x: i32, y: i32) -> Result<Option<EntityId>, BoardError> {
        Ok(self.tile_at(x, y)?.top())
    }

    /// The kind of the topmost sprite at `(x, y)`; `Empty` for a bare tile.
    pub fn kind_at(&self, x: i32, y: i32) -> Result<SpriteKind, BoardError> {
        Ok(self
            .sprite_at(x, y)?
            .and_then(|id| self.entities.get(id.index()))
            .map_or(SpriteKind::Empty, Entity::kind))
    }

    /// Adds a new, detached sprite to the arena.
    pub fn spawn(&mut self, sprite: Sprite) -> EntityId {
        let id = EntityId(self.entities.len() as u32);
        self.entities.push(Entity::new(sprite));
        id
    }

    pub fn entity(&self, id: EntityId) -> Result<&Entity, EntityError> {
        self.entities.get(id.index()).ok_or(EntityError::NotFound(id))
    }

    pub(crate) fn entity_mut(&mut self, id: EntityId) -> Result<&mut Entity, EntityError> {
        self.entities.get_mut(id.index()).ok_or(EntityError::NotFound(id))
    }

    /// Every sprite ever spawned, attached or not.
    pub fn entities(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities
            .iter()
            .enumerate()
            .map(|(index, entity)| (EntityId(index as u32), entity))
    }

    /// Puts a detached sprite on the tile at `(x, y)`. Stacking is allowed.
    pub fn place(&mut self, id: EntityId, x: i32, y: i32) -> GameResult<()> {
        self.check_borders(x, y)?;
        self.occupy(id, IVec2::new(x, y))
    }

    /// Attaches a detached sprite to the tile at `position`, on top of whatever is there.
    pub fn occupy(&mut self, id: EntityId, position: IVec2) -> GameResult<()> {
        let entity = self.entity(id)?;
        if entity.tile.is_some() {
            return Err(EntityError::AlreadyPlaced(id).into());
        }

        self.tile_at_mut(position.x, position.y)?.add(id);
        self.entity_mut(id)?.tile = Some(position);

        debug_assert_eq!(self.tile_at(position.x, position.y).ok().and_then(Tile::top), Some(id));
        Ok(())
    }

    /// Detaches a sprite from its tile, returning the coordinates it left.
    pub fn deoccupy(&mut self, id: EntityId) -> GameResult<IVec2> {
        let position = self.entity(id)?.tile.ok_or(EntityError::NotPlaced(id))?;

        self.tile_at_mut(position.x, position.y)?.drop_sprite(id);
        self.entity_mut(id)?.tile = None;
        Ok(position)
    }

    /// The tile at `(start + delta)`, wrapping around each edge independently.
    pub fn tile_at_offset(&self, start: IVec2, delta: IVec2) -> Result<&Tile, BoardError> {
        self.check_borders(start.x, start.y)?;

        let x = tunnelled_coordinate(start.x, self.width, delta.x);
        let y = tunnelled_coordinate(start.y, self.height, delta.y);
        if (x, y) != (start.x + delta.x, start.y + delta.y) {
            trace!(from = ?start, to = ?IVec2::new(x, y), "Tunnelled across board edge");
        }
        self.tile_at(x, y)
    }

    /// The neighbouring tile in `direction`, re-entering from the opposite edge when
    /// stepping off the board.
    pub fn tile_in_direction(&self, start: IVec2, direction: Direction) -> Result<&Tile, BoardError> {
        self.tile_at_offset(start, direction.as_ivec2())
    }
}

/// `current + delta` folded back into `0..max`; non-negative for negative deltas too.
fn tunnelled_coordinate(current: i32, max: i32, delta: i32) -> i32 {
    debug_assert!((0..max).contains(&current));
    (current + delta).rem_euclid(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tunnelled_coordinate_wraps_both_ways() {
        assert_eq!(tunnelled_coordinate(0, 5, -1), 4);
        assert_eq!(tunnelled_coordinate(4, 5, 1), 0);
        assert_eq!(tunnelled_coordinate(2, 5, 1), 3);
        assert_eq!(tunnelled_coordinate(0, 1, -1), 0);
    }

    #[test]
    fn test_tiles_know_their_coordinates() {
        let board = Board::new(3, 2);
        assert!(board.tile_invariant());
        assert_eq!(board.tiles().count(), 6);
        assert_eq!(board.tile_at(2, 1).map(Tile::position), Ok(IVec2::new(2, 1)));
    }
}
