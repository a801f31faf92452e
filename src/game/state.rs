//! The match: which high-level state a session is in, and which drivers run because of it.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use strum_macros::{EnumIter, IntoStaticStr};
use tracing::{debug, info};

use crate::entity::Direction;
use crate::error::GameResult;
use crate::game::observer::GameObserver;
use crate::game::{Game, MoveOutcome, SharedGame};
use crate::systems::Controller;

/// The states a match can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, IntoStaticStr)]
pub enum MatchState {
    Playing,
    /// Waiting to be (re)started; the initial state.
    #[default]
    Paused,
    Won,
    Lost,
}

impl MatchState {
    /// The text shown to the player for this state.
    pub fn message(self) -> &'static str {
        match self {
            MatchState::Playing => "Playing",
            MatchState::Paused => "Halted",
            MatchState::Won => "You have won :-)",
            MatchState::Lost => "You have lost :-(",
        }
    }
}

/// The presentation resource owned by a match, released on [`Match::exit`].
pub trait Disposable: Send {
    fn dispose(&self);
}

type StateListener = Box<dyn Fn(MatchState) + Send>;

struct MatchCore {
    state: MatchState,
    controllers: Vec<Arc<dyn Controller>>,
    listeners: Vec<StateListener>,
}

impl MatchCore {
    fn update_state(&mut self, next: MatchState) {
        if self.state == next {
            return;
        }
        info!(from = ?self.state, to = ?next, "Match state changed");
        self.state = next;
        for listener in &self.listeners {
            listener(next);
        }
    }

    fn start_controllers(&self) {
        for controller in &self.controllers {
            controller.start();
        }
    }

    fn stop_controllers(&self) {
        for controller in &self.controllers {
            controller.stop();
        }
    }

    /// Brings the match state in line with what the game reports.
    fn reconcile(&mut self, died: bool, won: bool) {
        let next = match self.state {
            MatchState::Playing if died => MatchState::Lost,
            MatchState::Playing if won => MatchState::Won,
            // Someone reset the game underneath us.
            MatchState::Won if !won => MatchState::Paused,
            MatchState::Lost if !died => MatchState::Paused,
            _ => return,
        };
        self.update_state(next);
        self.stop_controllers();
    }
}

/// Re-evaluates the match whenever the game reports a change.
struct MatchObserver {
    core: Weak<Mutex<MatchCore>>,
}

impl GameObserver for MatchObserver {
    fn game_changed(&self, game: &Game) {
        if let Some(core) = self.core.upgrade() {
            core.lock().reconcile(game.died(), game.won());
        }
    }
}

/// Maps the high-level events of a session (start, stop, moves, exit) onto the game,
/// and starts or stops the periodic drivers as the match moves between states.
///
/// Locks are always taken game first, match second. Callbacks registered with
/// [`Match::on_state_change`] run under the match lock and must not call back into
/// the match.
pub struct Match {
    game: SharedGame,
    core: Arc<Mutex<MatchCore>>,
    disposable: Mutex<Option<Box<dyn Disposable>>>,
}

impl Match {
    /// A paused match over `game`, listening to its changes.
    pub fn new(game: SharedGame) -> Self {
        let core = Arc::new(Mutex::new(MatchCore {
            state: MatchState::Paused,
            controllers: Vec::new(),
            listeners: Vec::new(),
        }));
        game.lock().attach(MatchObserver {
            core: Arc::downgrade(&core),
        });

        Self {
            game,
            core,
            disposable: Mutex::new(None),
        }
    }

    /// Add an external controller, to be started and stopped with the match.
    pub fn controlling(self, controller: Arc<dyn Controller>) -> Self {
        self.core.lock().controllers.push(controller);
        self
    }

    /// Provide the resource to be released during exit.
    pub fn with_disposable(self, disposable: impl Disposable + 'static) -> Self {
        *self.disposable.lock() = Some(Box::new(disposable));
        self
    }

    /// Be told about every state change.
    pub fn on_state_change(&self, listener: impl Fn(MatchState) + Send + 'static) {
        self.core.lock().listeners.push(Box::new(listener));
    }

    pub fn state(&self) -> MatchState {
        self.core.lock().state
    }

    pub fn game(&self) -> &SharedGame {
        &self.game
    }

    /// Starts the drivers and begins playing. Only has an effect while paused.
    pub fn start(&self) {
        let game = self.game.lock();
        let mut core = self.core.lock();
        if core.state != MatchState::Paused {
            debug!(state = ?core.state, "Ignoring start request");
            return;
        }

        core.start_controllers();
        core.update_state(MatchState::Playing);
        // A game that is already decided ends right away.
        core.reconcile(game.died(), game.won());
    }

    /// Stops the drivers and pauses. Only has an effect while playing.
    pub fn stop(&self) {
        let mut core = self.core.lock();
        if core.state != MatchState::Playing {
            debug!(state = ?core.state, "Ignoring stop request");
            return;
        }

        core.stop_controllers();
        core.update_state(MatchState::Paused);
    }

    /// Moves the player, provided the match is being played; ignored otherwise.
    pub fn attempt_player_move(&self, direction: Direction) -> GameResult<MoveOutcome> {
        let mut game = self.game.lock();
        if self.core.lock().state != MatchState::Playing {
            debug!(?direction, "Ignoring move while not playing");
            return Ok(MoveOutcome::Ignored);
        }

        let outcome = game.move_player(direction)?;
        self.core.lock().reconcile(game.died(), game.won());
        Ok(outcome)
    }

    pub fn up(&self) -> GameResult<MoveOutcome> {
        self.attempt_player_move(Direction::Up)
    }

    pub fn down(&self) -> GameResult<MoveOutcome> {
        self.attempt_player_move(Direction::Down)
    }

    pub fn left(&self) -> GameResult<MoveOutcome> {
        self.attempt_player_move(Direction::Left)
    }

    pub fn right(&self) -> GameResult<MoveOutcome> {
        self.attempt_player_move(Direction::Right)
    }

    /// Re-checks the game for a win or a death, e.g. after it was changed from outside.
    pub fn reevaluate(&self) {
        let game = self.game.lock();
        self.core.lock().reconcile(game.died(), game.won());
    }

    /// Stops every driver for good and releases the presentation resource.
    ///
    /// Must not be called while holding the game lock: in-flight driver ticks are
    /// waited for, and they need that lock to finish.
    pub fn exit(&self) {
        let controllers = {
            let core = self.core.lock();
            core.stop_controllers();
            core.controllers.clone()
        };
        for controller in controllers {
            controller.shutdown();
        }

        if let Some(disposable) = self.disposable.lock().take() {
            disposable.dispose();
        }
        info!("Match exited");
    }
}
