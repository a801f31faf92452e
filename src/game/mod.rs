//! This module contains the core game model: move resolution, scoring and the
//! win/loss queries every other part of the game builds on.

use std::sync::Arc;

use glam::IVec2;
use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::entity::{Direction, Entity, EntityId, Player, SpriteKind};
use crate::error::{EntityError, GameResult};
use crate::game::observer::GameObserver;
use crate::game::points::{PointInspector, PointManager};
use crate::map::board::Board;

pub mod observer;
pub mod points;
pub mod state;

/// A game shared between the input thread and the periodic drivers.
///
/// Every read-then-write access to the game goes through this one lock.
pub type SharedGame = Arc<Mutex<Game>>;

/// What became of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mover now stands on the target tile.
    Moved,
    /// A wall was in the way; nothing changed.
    Blocked,
    /// The move was not attempted at all (dead player, halted match).
    Ignored,
}

impl MoveOutcome {
    pub fn moved(self) -> bool {
        self == MoveOutcome::Moved
    }
}

/// Keeps track of all activity going on during a game.
///
/// Owns the board (and with it every sprite), the point bookkeeping, and the roster of
/// player and ghosts. The roster is fixed once the game is built; sprites only
/// disappear by being detached from their tile when eaten.
pub struct Game {
    board: Board,
    points: PointManager,
    player: EntityId,
    ghosts: Vec<EntityId>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl Game {
    /// Assembles a game from a populated board.
    ///
    /// `player` must be a player sprite and every id in `ghosts` a ghost sprite.
    pub fn from_parts(board: Board, player: EntityId, ghosts: Vec<EntityId>, points: PointManager) -> GameResult<Self> {
        if board.entity(player)?.kind() != SpriteKind::Player {
            return Err(EntityError::NotAPlayer(player).into());
        }
        for &ghost in &ghosts {
            if board.entity(ghost)?.kind() != SpriteKind::Ghost {
                return Err(EntityError::NotAGhost(ghost).into());
            }
        }

        debug!(
            width = board.width(),
            height = board.height(),
            ghosts = ghosts.len(),
            food = points.total_food_in_game(),
            "Game assembled"
        );

        Ok(Self {
            board,
            points,
            player,
            ghosts,
            observers: Vec::new(),
        })
    }

    /// Shares this game between threads.
    pub fn into_shared(self) -> SharedGame {
        Arc::new(Mutex::new(self))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The object keeping track of points.
    pub fn points(&self) -> &PointManager {
        &self.points
    }

    pub fn player_id(&self) -> EntityId {
        self.player
    }

    pub fn player(&self) -> Result<&Player, EntityError> {
        self.board
            .entity(self.player)?
            .sprite()
            .as_player()
            .ok_or(EntityError::NotAPlayer(self.player))
    }

    /// Direct access to the player's state, e.g. to resurrect it.
    pub fn player_mut(&mut self) -> Result<&mut Player, EntityError> {
        let id = self.player;
        self.board
            .entity_mut(id)?
            .sprite
            .as_player_mut()
            .ok_or(EntityError::NotAPlayer(id))
    }

    /// A copy of the ghosts in the game; later changes to the game do not show up in it.
    pub fn ghosts(&self) -> Vec<EntityId> {
        self.ghosts.clone()
    }

    /// Coordinates of the tile `id` occupies.
    pub fn location_of(&self, id: EntityId) -> GameResult<IVec2> {
        Ok(self.board.entity(id)?.tile().ok_or(EntityError::NotPlaced(id))?)
    }

    /// Attach an observer interested in successful moves.
    pub fn attach(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// True iff the player has died.
    pub fn died(&self) -> bool {
        !self.player().is_ok_and(Player::is_alive)
    }

    /// True iff the player has eaten everything on the board.
    pub fn won(&self) -> bool {
        self.points.all_eaten()
    }

    /// Moves the player one tile in `direction`.
    ///
    /// Food on the target tile is eaten, a ghost there kills the player (who still
    /// ends up on the ghost's tile), and a wall blocks the move. A dead player does
    /// not move at all.
    pub fn move_player(&mut self, direction: Direction) -> GameResult<MoveOutcome> {
        let player = self.player;
        if !self.player()?.is_alive() {
            trace!(?direction, "Ignoring move of dead player");
            return Ok(MoveOutcome::Ignored);
        }

        let Some((target, occupant)) = self.resolve_target(player, direction)? else {
            trace!(?direction, "Player blocked by wall");
            return Ok(MoveOutcome::Blocked);
        };

        if let Some((occupant, kind)) = occupant {
            match kind {
                SpriteKind::Food => self.eat_food(occupant)?,
                SpriteKind::Ghost => {
                    debug!(ghost = %occupant, tile = ?target, "Player ran into a ghost");
                    self.player_mut()?.die();
                }
                _ => {}
            }
        }

        self.relocate(player, target)?;
        self.player_mut()?.set_direction(direction);
        self.notify_observers();
        Ok(MoveOutcome::Moved)
    }

    /// Moves `ghost` one tile in `direction`.
    ///
    /// A ghost landing on the player kills it. Ghosts do not eat: food stays underneath
    /// and is visible again once the ghost moves on.
    pub fn move_ghost(&mut self, ghost: EntityId, direction: Direction) -> GameResult<MoveOutcome> {
        if self.board.entity(ghost)?.kind() != SpriteKind::Ghost {
            return Err(EntityError::NotAGhost(ghost).into());
        }

        let Some((target, occupant)) = self.resolve_target(ghost, direction)? else {
            trace!(%ghost, ?direction, "Ghost blocked by wall");
            return Ok(MoveOutcome::Blocked);
        };

        if let Some((_, SpriteKind::Player)) = occupant {
            debug!(%ghost, tile = ?target, "Ghost caught the player");
            self.player_mut()?.die();
        }

        self.relocate(ghost, target)?;
        self.notify_observers();
        Ok(MoveOutcome::Moved)
    }

    /// Finds where `mover` would end up going `direction`, and what stands on top there.
    /// Returns `None` when a wall is in the way.
    #[allow(clippy::type_complexity)]
    fn resolve_target(
        &self,
        mover: EntityId,
        direction: Direction,
    ) -> GameResult<Option<(IVec2, Option<(EntityId, SpriteKind)>)>> {
        let from = self.location_of(mover)?;
        let target = self.board.tile_in_direction(from, direction)?;

        let occupant = match target.top() {
            Some(id) => Some((id, self.board.entity(id)?.kind())),
            None => None,
        };

        Ok(match occupant {
            Some((_, SpriteKind::Wall)) => None,
            _ => Some((target.position(), occupant)),
        })
    }

    fn eat_food(&mut self, food: EntityId) -> GameResult<()> {
        let points = self.board.entity(food)?.sprite().points().unwrap_or_default();

        let player = self.player;
        let player_state = self
            .board
            .entity_mut(player)?
            .sprite
            .as_player_mut()
            .ok_or(EntityError::NotAPlayer(player))?;
        self.points.consume(player_state, points);
        self.board.deoccupy(food)?;

        trace!(%food, points, eaten = self.points.food_eaten(), "Food eaten");
        if self.points.all_eaten() {
            debug!(total = self.points.total_food_in_game(), "All food eaten");
        }
        Ok(())
    }

    fn relocate(&mut self, mover: EntityId, target: IVec2) -> GameResult<()> {
        self.board.deoccupy(mover)?;
        self.board.occupy(mover, target)
    }

    /// Warn the observers that the state has changed.
    fn notify_observers(&self) {
        for observer in &self.observers {
            observer.game_changed(self);
        }
    }

    /// Every sprite currently standing on some tile.
    pub fn sprites(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.board.entities().filter(|(_, entity)| entity.tile().is_some())
    }
}
