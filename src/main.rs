use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use tilepac::app::{App, Console};
use tilepac::config::load_config;
use tilepac::logging::setup_logging;
use tracing::info;

/// Plays a map on the console. The map file may be given as the only argument;
/// otherwise `PACMAN_MAP` or the built-in board is used.
pub fn main() -> Result<()> {
    setup_logging();

    let mut config = load_config()?;
    if let Some(map) = std::env::args_os().nth(1) {
        config.map = Some(PathBuf::from(map));
    }
    info!(?config, "Configuration loaded");

    let stdout = io::stdout();
    let clear = stdout.is_terminal();
    let app = App::new(&config, Console::new(stdout, clear))?;
    app.run(io::stdin().lock())
}
