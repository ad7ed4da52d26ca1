//! Console session: one or more games against the computer.

use crate::config::GameConfig;
use crate::console::{ConsoleError, Terminal, ask_until};
use crate::orchestrator::{GameOutcome, Orchestrator};
use crate::players::{ConsoleHuman, MinimaxAi, Seat};
use anyhow::Result;
use derive_getters::Getters;
use noughts_core::{Board, Symbol};
use tracing::{info, instrument};

const NUMBERING_KEY: &str = "1 2 3\n4 5 6\n7 8 9";

/// Tally of finished games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct SessionSummary {
    /// Games played to the end.
    games: u32,
    /// Games the human won.
    human_wins: u32,
    /// Games the computer won.
    ai_wins: u32,
    /// Games that ended in a tie.
    ties: u32,
}

impl SessionSummary {
    fn record(&mut self, outcome: GameOutcome, human: Symbol) {
        self.games += 1;
        match outcome.winner() {
            Some(winner) if winner == human => self.human_wins += 1,
            Some(_) => self.ai_wins += 1,
            None => self.ties += 1,
        }
    }
}

/// Runs games back to back until the player declines another.
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    summary: SessionSummary,
}

impl Session {
    /// Creates a session with the given settings.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            summary: SessionSummary::default(),
        }
    }

    /// Plays until the player declines a rematch or input ends.
    ///
    /// End of input is a normal way to leave and is not reported as an
    /// error.
    #[instrument(skip_all)]
    pub fn run(&mut self, term: &mut dyn Terminal) -> Result<SessionSummary> {
        loop {
            match self.play_round(term) {
                Ok(true) => term.say("")?,
                Ok(false) => break,
                Err(err) if is_input_closed(&err) => {
                    info!("Input closed, ending session");
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        info!(summary = ?self.summary, "Session finished");
        Ok(self.summary)
    }

    /// Plays one game and asks about the next. Returns whether to continue.
    fn play_round(&mut self, term: &mut dyn Terminal) -> Result<bool> {
        let human = match *self.config.human() {
            Some(symbol) => symbol,
            None => ask_symbol(term)?,
        };

        let outcome = self.play_game(human, term)?;
        self.summary.record(outcome, human);
        term.say(match outcome.winner() {
            Some(winner) if winner == human => "You won!",
            Some(_) => "The AI won!",
            None => "The game is a tie!",
        })?;

        if !*self.config.ask_replay() {
            return Ok(false);
        }
        Ok(ask_replay(term)?)
    }

    #[instrument(skip(self, term))]
    fn play_game(&mut self, human: Symbol, term: &mut dyn Terminal) -> Result<GameOutcome> {
        if *self.config.show_key() {
            term.say("\nWhenever it is your turn, enter the number of your move based on the diagram below:")?;
            term.say(NUMBERING_KEY)?;
        }
        if human == Symbol::X {
            term.say("")?;
            term.say(&Board::new().to_string())?;
        }

        let you: Box<dyn Seat> = Box::new(ConsoleHuman::new("You"));
        let ai: Box<dyn Seat> = Box::new(MinimaxAi::new("The AI"));
        let (player_x, player_o) = match human {
            Symbol::X => (you, ai),
            Symbol::O => (ai, you),
        };

        Orchestrator::new(player_x, player_o).run(term)
    }
}

fn ask_symbol(term: &mut dyn Terminal) -> Result<Symbol, ConsoleError> {
    ask_until(term, "Are you x or o?", "You must enter x or o!", |answer| {
        answer.parse().ok()
    })
}

fn ask_replay(term: &mut dyn Terminal) -> Result<bool, ConsoleError> {
    ask_until(
        term,
        "\nPlay again? (y/n)",
        "Please enter either 'y' or 'n'.",
        |answer| match answer {
            "y" => Some(true),
            "n" => Some(false),
            _ => None,
        },
    )
}

fn is_input_closed(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<ConsoleError>(),
        Some(ConsoleError::InputClosed)
    )
}
