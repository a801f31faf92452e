use crate::game::Game;

/// Something interested in successful moves on a [`Game`].
///
/// Observers are told *that* something changed, nothing more; they re-query whatever
/// they need through the `&Game` they are handed. The call happens inside the game's
/// critical section, so an observer must never try to lock the shared game itself.
pub trait GameObserver: Send {
    fn game_changed(&self, game: &Game);
}

impl<F> GameObserver for F
where
    F: Fn(&Game) + Send,
{
    fn game_changed(&self, game: &Game) {
        self(game)
    }
}
