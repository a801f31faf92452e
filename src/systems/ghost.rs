use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{error, trace};

use crate::constants::GHOST_MOVE_DELAY;
use crate::entity::Direction;
use crate::error::GameResult;
use crate::game::{MoveOutcome, SharedGame};
use crate::systems::{Controller, Timer};

/// Moves a uniformly random ghost in a uniformly random direction on every tick.
///
/// The randomizer is owned by the mover and created once per session; pass a seeded
/// one through [`RandomGhostMover::with_rng`] for reproducible runs.
pub struct RandomGhostMover<R: Rng + Send + 'static = SmallRng> {
    mover: Arc<GhostMover<R>>,
    timer: Timer,
}

struct GhostMover<R> {
    game: SharedGame,
    rng: Mutex<R>,
}

impl<R: Rng + Send> GhostMover<R> {
    fn step(&self) -> GameResult<MoveOutcome> {
        let mut game = self.game.lock();

        // The roster is re-read every tick, so a restarted game is picked up as well.
        let ghosts = game.ghosts();
        let mut rng = self.rng.lock();
        let Some(&ghost) = ghosts.choose(&mut *rng) else {
            return Ok(MoveOutcome::Ignored);
        };
        let direction = Direction::DIRECTIONS[rng.random_range(0..Direction::DIRECTIONS.len())];
        drop(rng);

        let outcome = game.move_ghost(ghost, direction)?;
        trace!(%ghost, ?direction, ?outcome, "Random ghost move");
        Ok(outcome)
    }
}

impl RandomGhostMover<SmallRng> {
    /// A mover seeded from the operating system, ticking every [`GHOST_MOVE_DELAY`].
    pub fn new(game: SharedGame) -> GameResult<Self> {
        Self::with_delay(game, GHOST_MOVE_DELAY)
    }

    pub fn with_delay(game: SharedGame, delay: Duration) -> GameResult<Self> {
        Self::with_rng(game, delay, SmallRng::from_os_rng())
    }

    /// A mover with a fixed seed, for reproducible ghost behavior.
    pub fn seeded(game: SharedGame, delay: Duration, seed: u64) -> GameResult<Self> {
        Self::with_rng(game, delay, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send + 'static> RandomGhostMover<R> {
    pub fn with_rng(game: SharedGame, delay: Duration, rng: R) -> GameResult<Self> {
        let mover = Arc::new(GhostMover {
            game,
            rng: Mutex::new(rng),
        });

        let ticking = Arc::clone(&mover);
        let timer = Timer::new("ghost-mover", delay, move || run_step(&ticking))?;
        Ok(Self { mover, timer })
    }

    /// Performs one random move right away, reporting what happened.
    pub fn step(&self) -> GameResult<MoveOutcome> {
        self.mover.step()
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }
}

fn run_step<R: Rng + Send>(mover: &GhostMover<R>) {
    if let Err(error) = mover.step() {
        error!(%error, "Ghost move failed");
    }
}

impl<R: Rng + Send + 'static> Controller for RandomGhostMover<R> {
    fn start(&self) {
        self.timer.start();
    }

    fn stop(&self) {
        self.timer.stop();
    }

    fn tick(&self) {
        run_step(&self.mover);
    }

    fn shutdown(&self) {
        self.timer.shutdown();
    }
}
