use crate::entity::direction::Direction;

/// The player's own state: points eaten, whether it is still alive, and where it is facing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    points: u32,
    alive: bool,
    direction: Direction,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            points: 0,
            alive: true,
            direction: Direction::Left,
        }
    }
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// The amount of food eaten by this player.
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Increments the amount of food eaten, returning the new total.
    ///
    /// Only a living player eats; points never decrease.
    pub fn add_points(&mut self, extra: u32) -> u32 {
        debug_assert!(self.alive, "a dead player cannot earn points");
        self.points += extra;
        self.points
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn die(&mut self) {
        self.alive = false;
    }

    /// The player returns from the dead.
    pub fn resurrect(&mut self) {
        self.alive = true;
    }

    /// The direction of the last successful move.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }
}
