//! This module contains all the constants used in the game.

use std::time::Duration;

/// The default delay between two ghost moves.
pub const GHOST_MOVE_DELAY: Duration = Duration::from_millis(40);

/// The default delay between two animation frames.
pub const ANIMATION_DELAY: Duration = Duration::from_millis(200);

/// Prefix of the environment variables read by [`crate::config::Config`].
pub const ENV_PREFIX: &str = "PACMAN_";

/// The built-in board, used when no map file is given.
///
/// `P` is the player, `G` a ghost, `.` food, `#` a wall. The gaps in the outer wall
/// are tunnels: walking off one edge re-enters on the opposite one.
pub const DEFAULT_BOARD: [&str; 15] = [
    "###########  ##########",
    "#.........#  #........#",
    "#.###.###.#  #.###.##.#",
    "#.#.......    .......#.",
    "#.#.#####.####.#####.#.",
    "#...#...G.........#...#",
    "###.#.###.#  #.##.#.###",
    "   ...#...  P ..#...   ",
    "###.#.###.#  #.##.#.###",
    "#...#.........G...#...#",
    "#.#.#####.####.#####.#.",
    "#.#.......    .......#.",
    "#.###.###.#  #.###.##.#",
    "#.........#  #........#",
    "###########  ##########",
];
