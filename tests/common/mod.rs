#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tilepac::entity::{EntityId, SpriteKind};
use tilepac::game::{Game, SharedGame};
use tilepac::map::parser::MapParser;
use tilepac::systems::Controller;

/// Builds a game from map rows with the default factory.
pub fn game_from(rows: &[&str]) -> Game {
    MapParser::default().parse_map(rows).unwrap()
}

pub fn shared_game_from(rows: &[&str]) -> SharedGame {
    game_from(rows).into_shared()
}

/// The first ghost of the game.
pub fn first_ghost(game: &Game) -> EntityId {
    game.ghosts()[0]
}

/// The kind on top of the tile at `(x, y)`.
pub fn kind_at(game: &Game, x: i32, y: i32) -> SpriteKind {
    game.board().kind_at(x, y).unwrap()
}

/// Counts how often the game reported a change; attach a clone to the game.
#[derive(Clone, Default)]
pub struct ChangeCounter(Arc<AtomicUsize>);

impl ChangeCounter {
    pub fn attach_to(&self, game: &mut Game) {
        let counter = Arc::clone(&self.0);
        game.attach(move |_: &Game| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// What a [`RecordingController`] was asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerCall {
    Start,
    Stop,
    Tick,
    Shutdown,
}

/// A controller which only records the calls it receives.
#[derive(Default)]
pub struct RecordingController {
    calls: Mutex<Vec<ControllerCall>>,
}

impl RecordingController {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<ControllerCall> {
        self.calls.lock().clone()
    }

    pub fn last_call(&self) -> Option<ControllerCall> {
        self.calls.lock().last().copied()
    }

    fn record(&self, call: ControllerCall) {
        self.calls.lock().push(call);
    }
}

impl Controller for RecordingController {
    fn start(&self) {
        self.record(ControllerCall::Start);
    }

    fn stop(&self) {
        self.record(ControllerCall::Stop);
    }

    fn tick(&self) {
        self.record(ControllerCall::Tick);
    }

    fn shutdown(&self) {
        self.record(ControllerCall::Shutdown);
    }
}
