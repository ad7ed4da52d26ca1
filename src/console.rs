//! Line-oriented console I/O.
//!
//! Everything the game says or asks goes through [`Terminal`], so the game
//! loop can run against stdin/stdout or against scripted buffers in tests.

use std::io::{BufRead, Write};
use tracing::{debug, instrument, trace};

/// Error raised by console I/O.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ConsoleError {
    /// Input reached end-of-file while a line was expected.
    #[display("Input closed")]
    InputClosed,

    /// Reading or writing failed.
    #[display("Console I/O failed: {}", _0)]
    Io(String),
}

impl std::error::Error for ConsoleError {}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Text channel to the human player.
pub trait Terminal {
    /// Writes `text` followed by a newline.
    fn say(&mut self, text: &str) -> Result<(), ConsoleError>;

    /// Reads one line with the trailing newline removed.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InputClosed`] at end of input.
    fn read_line(&mut self) -> Result<String, ConsoleError>;
}

/// [`Terminal`] over any buffered reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl Console<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal for Console<R, W> {
    fn say(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            debug!("End of input");
            return Err(ConsoleError::InputClosed);
        }
        let line = line.trim_end_matches(['\r', '\n']).to_string();
        trace!(%line, "Read line");
        Ok(line)
    }
}

/// Keeps asking until `parse` accepts an answer.
///
/// `prompt` is shown once; `retry` is shown after every rejected answer.
#[instrument(skip(term, parse))]
pub fn ask_until<T>(
    term: &mut dyn Terminal,
    prompt: &str,
    retry: &str,
    mut parse: impl FnMut(&str) -> Option<T>,
) -> Result<T, ConsoleError> {
    term.say(prompt)?;
    loop {
        let line = term.read_line()?;
        if let Some(value) = parse(line.trim()) {
            return Ok(value);
        }
        debug!(%line, "Rejected answer");
        term.say(retry)?;
    }
}
