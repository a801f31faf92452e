use std::sync::Arc;
use std::time::Duration;

use crate::constants::ANIMATION_DELAY;
use crate::error::GameResult;
use crate::systems::{BoardView, Controller, Timer};

type Redraw = Arc<dyn Fn(&BoardView) + Send + Sync>;

/// Triggers the board view to show the next animation frame at a fixed pace.
pub struct Animator {
    view: Arc<BoardView>,
    redraw: Redraw,
    timer: Timer,
}

impl Animator {
    /// An animator ticking every [`ANIMATION_DELAY`].
    pub fn new(view: Arc<BoardView>) -> GameResult<Self> {
        Self::with_delay(view, ANIMATION_DELAY)
    }

    pub fn with_delay(view: Arc<BoardView>, delay: Duration) -> GameResult<Self> {
        Self::redrawing(view, delay, |_| {})
    }

    /// An animator which also calls `redraw` after every frame change.
    pub fn redrawing(view: Arc<BoardView>, delay: Duration, redraw: impl Fn(&BoardView) + Send + Sync + 'static) -> GameResult<Self> {
        let redraw: Redraw = Arc::new(redraw);

        let animated = Arc::clone(&view);
        let on_frame = Arc::clone(&redraw);
        let timer = Timer::new("animator", delay, move || next_frame(&animated, &*on_frame))?;
        Ok(Self { view, redraw, timer })
    }

    pub fn view(&self) -> &Arc<BoardView> {
        &self.view
    }
}

fn next_frame(view: &BoardView, redraw: &(dyn Fn(&BoardView) + Send + Sync)) {
    view.next_animation();
    redraw(view);
}

impl Controller for Animator {
    fn start(&self) {
        self.timer.start();
    }

    fn stop(&self) {
        self.timer.stop();
    }

    fn tick(&self) {
        next_frame(&self.view, &*self.redraw);
    }

    fn shutdown(&self) {
        self.timer.shutdown();
    }
}
