//! A plain-text view of the board.

use std::sync::atomic::{AtomicUsize, Ordering};

use thousands::Separable;

use crate::entity::{Direction, Sprite};
use crate::game::points::PointInspector;
use crate::game::Game;

/// Draws a game as text, one character per tile.
///
/// The only state is the animation frame, advanced by the
/// [`Animator`](crate::systems::Animator); it makes the player chomp and the ghosts wiggle.
#[derive(Debug, Default)]
pub struct BoardView {
    frame: AtomicUsize,
}

impl BoardView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the next animation frame on the following render.
    pub fn next_animation(&self) {
        self.frame.fetch_add(1, Ordering::Relaxed);
    }

    pub fn frame(&self) -> usize {
        self.frame.load(Ordering::Relaxed)
    }

    /// The character drawn for `sprite` in animation frame `frame`.
    pub fn glyph(sprite: &Sprite, frame: usize) -> char {
        let open = frame % 2 == 0;
        match sprite {
            Sprite::Player(player) if !player.is_alive() => 'X',
            Sprite::Player(_) if !open => 'O',
            // The mouth opens towards where the player is heading.
            Sprite::Player(player) => match player.direction() {
                Direction::Left => '>',
                Direction::Right => '<',
                Direction::Up => 'V',
                Direction::Down => '^',
            },
            Sprite::Ghost if open => 'M',
            Sprite::Ghost => 'W',
            Sprite::Food(_) => '.',
            Sprite::Wall => '#',
            Sprite::Other => '?',
        }
    }

    /// Renders the board, one line per row, showing the top sprite of every tile.
    ///
    /// Takes the game by reference: the caller holds the game lock, so the picture is a
    /// consistent snapshot.
    pub fn render_board(&self, game: &Game) -> String {
        let board = game.board();
        let frame = self.frame();
        let mut out = String::with_capacity(((board.width() + 1) * board.height()) as usize);

        for (index, tile) in board.tiles().enumerate() {
            if index > 0 && tile.x() == 0 {
                out.push('\n');
            }
            let glyph = tile
                .top()
                .and_then(|id| board.entity(id).ok())
                .map_or(' ', |entity| Self::glyph(entity.sprite(), frame));
            out.push(glyph);
        }
        out
    }

    /// The score line shown under the board.
    pub fn status_line(&self, game: &Game) -> String {
        let points = game.points();
        let score = game.player().map(|player| player.points()).unwrap_or_default();
        format!(
            "Score: {}  Food: {}/{}",
            score.separate_with_commas(),
            points.food_eaten().separate_with_commas(),
            points.total_food_in_game().separate_with_commas()
        )
    }

    /// Board and score line together.
    pub fn render(&self, game: &Game) -> String {
        format!("{}\n{}", self.render_board(game), self.status_line(game))
    }
}
