use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::game::state::{Disposable, Match, MatchState};
use crate::game::{MoveOutcome, SharedGame};
use crate::input::commands::GameCommand;
use crate::input::Bindings;
use crate::map::level::Level;
use crate::systems::{Animator, BoardView, RandomGhostMover};

/// Clears the terminal and moves the cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Where the board is drawn. Shared by the input loop and the animator thread.
pub struct Console {
    out: Mutex<Box<dyn Write + Send>>,
    clear: bool,
}

impl Console {
    /// `clear` wipes the screen before every frame; only useful on a real terminal.
    pub fn new(out: impl Write + Send + 'static, clear: bool) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
            clear,
        }
    }

    /// Draws a full frame.
    pub fn frame(&self, frame: &str) {
        let prefix = if self.clear { CLEAR_SCREEN } else { "" };
        self.write(format_args!("{prefix}{frame}\n"));
    }

    pub fn line(&self, line: &str) {
        self.write(format_args!("{line}\n"));
    }

    fn write(&self, args: std::fmt::Arguments<'_>) {
        let mut out = self.out.lock();
        if let Err(error) = out.write_fmt(args).and_then(|_| out.flush()) {
            warn!(%error, "Failed to write to console");
        }
    }
}

/// Marks the session closed once the match releases its presentation.
struct ConsoleCloser {
    console: Arc<Console>,
    closed: Arc<AtomicBool>,
}

impl Disposable for ConsoleCloser {
    fn dispose(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.console.line("Bye!");
    }
}

/// A console session: a match over one level, driven by lines of text.
pub struct App {
    game_match: Match,
    view: Arc<BoardView>,
    console: Arc<Console>,
    bindings: Bindings,
    closed: Arc<AtomicBool>,
}

impl App {
    pub fn new(config: &Config, console: Console) -> Result<Self> {
        let mut level = Level::new();
        if let Some(map) = &config.map {
            level.set_map_file(map);
        }
        let game = level.parse_map()?.into_shared();
        let console = Arc::new(console);
        let view = Arc::new(BoardView::new());

        let ghost_mover = match config.seed {
            Some(seed) => RandomGhostMover::seeded(Arc::clone(&game), config.ghost_delay(), seed)?,
            None => RandomGhostMover::with_delay(Arc::clone(&game), config.ghost_delay())?,
        };
        let animator = {
            let game = Arc::clone(&game);
            let console = Arc::clone(&console);
            Animator::redrawing(Arc::clone(&view), config.animation_delay(), move |view| {
                console.frame(&view.render(&game.lock()));
            })?
        };

        let closed = Arc::new(AtomicBool::new(false));
        let game_match = Match::new(game)
            .controlling(Arc::new(ghost_mover))
            .controlling(Arc::new(animator))
            .with_disposable(ConsoleCloser {
                console: Arc::clone(&console),
                closed: Arc::clone(&closed),
            });

        let announcer = Arc::clone(&console);
        game_match.on_state_change(move |state| announcer.line(state.message()));

        info!(map = ?config.map, seed = ?config.seed, "Session ready");
        Ok(Self {
            game_match,
            view,
            console,
            bindings: Bindings::default(),
            closed,
        })
    }

    /// Reads commands line by line until `quit` or the end of input, then closes the session.
    pub fn run(&self, input: impl BufRead) -> Result<()> {
        self.redraw();
        self.console.line("Type start, stop, quit, or w/a/s/d to move.");

        for line in input.lines() {
            let line = line?;
            let Some(command) = self.bindings.command_for(&line) else {
                if !line.trim().is_empty() {
                    self.console.line(&format!("Unknown command: {}", line.trim()));
                }
                continue;
            };
            if !self.handle_command(command)? {
                break;
            }
        }

        self.close();
        Ok(())
    }

    /// Applies one command. Returns `false` once the session should end.
    pub fn handle_command(&self, command: GameCommand) -> Result<bool> {
        debug!(?command, "Handling command");
        match command {
            GameCommand::MovePlayer(direction) => {
                if self.game_match.attempt_player_move(direction)? != MoveOutcome::Ignored {
                    self.redraw();
                }
            }
            GameCommand::Start => self.game_match.start(),
            GameCommand::Stop => self.game_match.stop(),
            GameCommand::Exit => return Ok(false),
        }
        Ok(true)
    }

    /// Stops all drivers for good. Safe to call more than once.
    pub fn close(&self) {
        if !self.is_closed() {
            self.game_match.exit();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    pub fn state(&self) -> MatchState {
        self.game_match.state()
    }

    pub fn game(&self) -> &SharedGame {
        self.game_match.game()
    }

    fn redraw(&self) {
        let frame = self.view.render(&self.game().lock());
        self.console.frame(&frame);
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.close();
    }
}
