use crate::entity::Player;

/// Read-only view on the points in a game, as handed to displays.
pub trait PointInspector {
    /// True iff every point put on the board has been eaten.
    fn all_eaten(&self) -> bool;

    /// The total amount of points actually consumed so far.
    fn food_eaten(&self) -> u32;

    /// The total amount of points put in the game.
    fn total_food_in_game(&self) -> u32;
}

/// Keeps track of points put on the board while building a game, and of the points
/// eaten while playing it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PointManager {
    put_on_board: u32,
    earned: u32,
}

impl PointManager {
    pub fn new() -> Self {
        Self::default()
    }

    fn invariant(&self) -> bool {
        self.earned <= self.put_on_board
    }

    /// While building the game, keep track of the total number of points.
    pub fn add_points_to_board(&mut self, delta: u32) {
        self.put_on_board += delta;
        debug_assert!(self.invariant());
    }

    /// While playing, let the player consume food worth `delta` points.
    ///
    /// Food is only ever eaten for exactly the amount it was placed with, so the
    /// consumed total can never overtake what was put on the board.
    pub fn consume(&mut self, player: &mut Player, delta: u32) {
        player.add_points(delta);
        self.earned += delta;
        debug_assert!(
            self.invariant(),
            "consumed {} exceeds placed {}",
            self.earned,
            self.put_on_board
        );
    }
}

impl PointInspector for PointManager {
    fn all_eaten(&self) -> bool {
        self.earned == self.put_on_board
    }

    fn food_eaten(&self) -> u32 {
        self.earned
    }

    fn total_food_in_game(&self) -> u32 {
        self.put_on_board
    }
}
