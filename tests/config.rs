use std::path::PathBuf;
use std::time::Duration;

use figment::Jail;
use pretty_assertions::assert_eq;
use tilepac::config::{load_config, Config};
use tilepac::error::ConfigError;

#[test]
fn test_defaults() {
    let config = Config::default();

    assert_eq!(config.map, None);
    assert_eq!(config.seed, None);
    assert_eq!(config.ghost_delay(), Duration::from_millis(40));
    assert_eq!(config.animation_delay(), Duration::from_millis(200));
}

#[test]
fn test_load_without_environment_uses_defaults() {
    Jail::expect_with(|_| {
        assert_eq!(load_config().unwrap(), Config::default());
        Ok(())
    });
}

#[test]
fn test_load_from_environment() {
    Jail::expect_with(|jail| {
        jail.set_env("PACMAN_MAP", "boards/small.txt");
        jail.set_env("PACMAN_GHOST_DELAY_MS", "15");
        jail.set_env("PACMAN_SEED", "1234");

        let config = load_config().unwrap();

        assert_eq!(config.map, Some(PathBuf::from("boards/small.txt")));
        assert_eq!(config.ghost_delay(), Duration::from_millis(15));
        assert_eq!(config.animation_delay(), Duration::from_millis(200));
        assert_eq!(config.seed, Some(1234));
        Ok(())
    });
}

#[test]
fn test_zero_delay_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("PACMAN_ANIMATION_DELAY_MS", "0");

        assert!(matches!(load_config(), Err(ConfigError::Invalid(_))));
        Ok(())
    });
}

#[test]
fn test_malformed_value_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("PACMAN_GHOST_DELAY_MS", "soon");

        assert!(matches!(load_config(), Err(ConfigError::Figment(_))));
        Ok(())
    });
}
