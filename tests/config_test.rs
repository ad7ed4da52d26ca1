//! Tests for loading configuration files.

use noughts::{GameConfig, Symbol};
use std::io::Write;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human = \"o\"\nask_replay = false").unwrap();

    let config = GameConfig::load(Some(file.path())).unwrap();
    assert_eq!(*config.human(), Some(Symbol::O));
    assert!(!*config.ask_replay());
    assert!(*config.show_key());
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let err = GameConfig::load(Some(missing.as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_absent_default_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let default = dir.path().join("noughts.toml");

    let config = GameConfig::load_from(None, &default).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_present_default_file_is_read() {
    let dir = tempfile::tempdir().unwrap();
    let default = dir.path().join("noughts.toml");
    std::fs::write(&default, "human = \"x\"\nshow_key = false\n").unwrap();

    let config = GameConfig::load_from(None, &default).unwrap();
    assert_eq!(*config.human(), Some(Symbol::X));
    assert!(!*config.show_key());
    assert!(*config.ask_replay());
}

#[test]
fn test_explicit_path_wins_over_default_file() {
    let dir = tempfile::tempdir().unwrap();
    let default = dir.path().join("noughts.toml");
    std::fs::write(&default, "human = \"x\"\n").unwrap();
    let explicit = dir.path().join("other.toml");
    std::fs::write(&explicit, "human = \"o\"\n").unwrap();

    let config = GameConfig::load_from(Some(explicit.as_path()), &default).unwrap();
    assert_eq!(*config.human(), Some(Symbol::O));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human = \"z\"").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_cli_flag_beats_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human = \"o\"").unwrap();

    let config = GameConfig::from_file(file.path())
        .unwrap()
        .with_human(Some(Symbol::X));
    assert_eq!(*config.human(), Some(Symbol::X));
}
