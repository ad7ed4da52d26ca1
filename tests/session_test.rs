//! End-to-end console sessions with scripted input.

use noughts::{Console, GameConfig, Session, SessionSummary, Symbol};
use std::io::Cursor;

fn run(config: GameConfig, input: &str) -> (SessionSummary, String) {
    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let summary = Session::new(config).run(&mut console).expect("session runs");
    let output = String::from_utf8(console.into_output()).expect("utf-8 output");
    (summary, output)
}

#[test]
fn test_two_games_with_bad_input_and_replay() {
    let input = [
        // Game 1: invalid symbol, then o. The AI opens in the center.
        "q", "o", //
        "1", "5", "10", "abc", "8", "6", "7", //
        // Replay prompt: invalid, then yes.
        "maybe", "y", //
        // Game 2: x, walks into a loss.
        "x", "1", "2", "7", "9", //
        "n",
    ]
    .join("\n")
        + "\n";

    let (summary, output) = run(GameConfig::default(), &input);

    assert_eq!(*summary.games(), 2);
    assert_eq!(*summary.ties(), 1);
    assert_eq!(*summary.ai_wins(), 1);
    assert_eq!(*summary.human_wins(), 0);

    assert_eq!(output.matches("Are you x or o?").count(), 2);
    assert_eq!(output.matches("You must enter x or o!").count(), 1);
    assert_eq!(output.matches("Please enter a valid position.").count(), 3);
    assert_eq!(output.matches("Please enter either 'y' or 'n'.").count(), 1);
    assert_eq!(output.matches("Play again? (y/n)").count(), 2);
    assert!(output.contains("The AI has moved at position 5."));
    assert!(output.contains("The game is a tie!"));
    assert!(output.contains("The AI won!"));
    assert!(!output.contains("You won!"));
}

#[test]
fn test_preset_symbol_single_game_ends_in_tie() {
    let config = GameConfig::default()
        .with_human(Some(Symbol::X))
        .with_ask_replay(false);
    let (summary, output) = run(config, "5\n2\n4\n3\n9\n");

    assert_eq!(*summary.games(), 1);
    assert_eq!(*summary.ties(), 1);
    assert!(!output.contains("Are you x or o?"));
    assert!(!output.contains("Play again?"));
    // Human plays x, so the empty board is shown before the first move.
    assert!(output.contains("_ _ _\n_ _ _\n_ _ _"));
    assert!(output.contains("The game is a tie!"));
}

#[test]
fn test_numbering_key_can_be_hidden() {
    let config = GameConfig::default()
        .with_human(Some(Symbol::X))
        .with_ask_replay(false)
        .with_show_key(false);
    let (_, output) = run(config, "center\n2\n4\n3\n9\n");

    assert!(!output.contains("1 2 3\n4 5 6\n7 8 9"));
    assert!(output.contains("The game is a tie!"));
}

#[test]
fn test_end_of_input_ends_session_cleanly() {
    let (summary, output) = run(GameConfig::default(), "o\n1\n");

    assert_eq!(*summary.games(), 0);
    assert!(output.contains("Enter your move:"));
    assert!(!output.contains("The game is a tie!"));
}

#[test]
fn test_end_of_input_at_replay_prompt_keeps_tally() {
    let config = GameConfig::default().with_human(Some(Symbol::X));
    let (summary, output) = run(config, "1\n2\n7\n9\n");

    assert_eq!(*summary.games(), 1);
    assert_eq!(*summary.ai_wins(), 1);
    assert!(output.contains("Play again? (y/n)"));
}
