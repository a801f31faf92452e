//! The periodic drivers acting on a running game, and the view they animate.
//!
//! Each driver is a [`Controller`]: something that can be started and stopped, and that
//! does one unit of work per tick while running.

pub mod animation;
pub mod ghost;
pub mod render;
pub mod timer;

pub use animation::Animator;
pub use ghost::RandomGhostMover;
pub use render::BoardView;
pub use timer::Timer;

/// A controller which can be started and stopped, and which generates ticks.
pub trait Controller: Send + Sync {
    /// Start ticking.
    fn start(&self);

    /// Stop ticking. Takes effect for future ticks; one already in flight still completes.
    fn stop(&self);

    /// Conduct one unit of the controller's behavior right now.
    fn tick(&self);

    /// Stop for good, waiting for any in-flight tick to finish.
    fn shutdown(&self) {
        self.stop();
    }
}
