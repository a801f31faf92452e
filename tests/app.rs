use std::io::{self, Cursor, Write};
use std::sync::Arc;

use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use tilepac::app::{App, Console};
use tilepac::config::Config;
use tilepac::entity::Direction;
use tilepac::game::state::MatchState;
use tilepac::input::commands::GameCommand;

/// A console output that can still be read after the app took it.
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn map_file(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("tilepac-app-{name}-{}.txt", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

/// A config whose drivers never fire on their own during a test.
fn quiet_config(map: Option<std::path::PathBuf>) -> Config {
    Config {
        map,
        ghost_delay_ms: 3_600_000,
        animation_delay_ms: 3_600_000,
        seed: Some(1),
    }
}

#[test]
fn test_session_plays_to_victory() {
    let path = map_file("victory", "#P..#\n#####\n");
    let output = SharedBuffer::default();
    let app = App::new(&quiet_config(Some(path.clone())), Console::new(output.clone(), false)).unwrap();

    app.run(Cursor::new("start\nd\nd\nquit\n")).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(app.state(), MatchState::Won);
    assert!(app.is_closed());
    let text = output.contents();
    assert!(text.contains("Playing"));
    assert!(text.contains("You have won :-)"));
    assert!(text.contains("Score: 20  Food: 20/20"));
    assert!(text.ends_with("Bye!\n"));
}

#[test]
fn test_moves_before_start_are_ignored() {
    let path = map_file("paused", "P..\n");
    let output = SharedBuffer::default();
    let app = App::new(&quiet_config(Some(path.clone())), Console::new(output.clone(), false)).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(app.handle_command(GameCommand::MovePlayer(Direction::Right)).unwrap());
    assert_eq!(app.state(), MatchState::Paused);
    assert_eq!(app.game().lock().player().unwrap().points(), 0);

    assert!(app.handle_command(GameCommand::Start).unwrap());
    assert!(app.handle_command(GameCommand::MovePlayer(Direction::Right)).unwrap());
    assert_eq!(app.game().lock().player().unwrap().points(), 10);

    assert!(app.handle_command(GameCommand::Stop).unwrap());
    assert_eq!(app.state(), MatchState::Paused);
    assert!(!app.handle_command(GameCommand::Exit).unwrap());
}

#[test]
fn test_unknown_commands_are_reported() {
    let output = SharedBuffer::default();
    let app = App::new(&quiet_config(None), Console::new(output.clone(), false)).unwrap();

    app.run(Cursor::new("jump\n\n")).unwrap();

    assert!(output.contents().contains("Unknown command: jump"));
    assert!(app.is_closed());
}

#[test]
fn test_missing_map_fails_to_start() {
    let config = quiet_config(Some("no-such-map.txt".into()));

    assert!(App::new(&config, Console::new(io::sink(), false)).is_err());
}

#[test]
fn test_close_is_idempotent() {
    let output = SharedBuffer::default();
    let app = App::new(&quiet_config(None), Console::new(output.clone(), false)).unwrap();

    app.close();
    app.close();
    drop(app);

    assert_eq!(output.contents().matches("Bye!").count(), 1);
}
