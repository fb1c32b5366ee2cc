//! Interactive prediction loop.
//!
//! The shell is a small state machine. Each turn blocks on exactly one line
//! of input; everything else is a pure call into the prediction engine.

use std::io::{self, BufRead, Write};

use curve_facade::{metric_key, PredictionEngine};
use tracing::debug;

use crate::display::format_prediction;
use crate::loader::parse_decimal;

const PROMPT: &str = "\nEnter a load value (empty line to exit): ";

/// Where the shell is in its loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShellState {
    /// Waiting for the next line of input
    Prompt,
    /// A valid load was read and is about to be evaluated
    Evaluate(f64),
    /// Empty line or end of input was seen
    Terminated,
}

/// Meaning of one line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Quit,
    Load(f64),
    Invalid(String),
}

impl Input {
    /// Interpret a raw line. Blank lines quit.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Input::Quit;
        }
        match parse_decimal(trimmed) {
            None => Input::Invalid("enter a valid numeric value".to_string()),
            Some(x) if !x.is_finite() => Input::Invalid("the load must be finite".to_string()),
            Some(x) if x < 0.0 => Input::Invalid("the load must not be negative".to_string()),
            Some(x) => Input::Load(x),
        }
    }
}

/// Read-eval-print loop over any line source and sink.
pub struct Shell<'a, R, W> {
    engine: &'a PredictionEngine,
    metrics: Vec<String>,
    input: R,
    output: W,
    state: ShellState,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Create a shell that prints `metrics` in the given order.
    ///
    /// Metrics without fitted coefficients are dropped from the display list.
    pub fn new<S: AsRef<str>>(
        engine: &'a PredictionEngine,
        metrics: &[S],
        input: R,
        output: W,
    ) -> Self {
        let mut display: Vec<String> = Vec::new();
        for key in metrics.iter().map(|m| metric_key(m.as_ref())) {
            if engine.table().contains(&key) && !display.contains(&key) {
                display.push(key);
            }
        }
        Self {
            engine,
            metrics: display,
            input,
            output,
            state: ShellState::Prompt,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    /// Advance the state machine by one transition.
    pub fn step(&mut self) -> io::Result<ShellState> {
        self.state = match self.state {
            ShellState::Prompt => {
                write!(self.output, "{}", PROMPT)?;
                self.output.flush()?;

                let mut line = Vec::new();
                if self.input.read_until(b'\n', &mut line)? == 0 {
                    ShellState::Terminated
                } else {
                    let input = match std::str::from_utf8(&line) {
                        Ok(text) => Input::parse(text),
                        Err(_) => Input::Invalid("the input is not valid UTF-8".to_string()),
                    };
                    match input {
                        Input::Quit => ShellState::Terminated,
                        Input::Load(x) => ShellState::Evaluate(x),
                        Input::Invalid(reason) => {
                            let raw = String::from_utf8_lossy(&line);
                            debug!(input = raw.trim(), "rejected input");
                            writeln!(self.output, "Error: {}.", reason)?;
                            ShellState::Prompt
                        }
                    }
                }
            }
            ShellState::Evaluate(x) => {
                self.print_predictions(x)?;
                ShellState::Prompt
            }
            ShellState::Terminated => ShellState::Terminated,
        };
        Ok(self.state)
    }

    /// Run until the user quits. Returns the number of loads evaluated.
    pub fn run(&mut self) -> io::Result<usize> {
        let mut served = 0;
        while self.state != ShellState::Terminated {
            if let ShellState::Evaluate(_) = self.step()? {
                served += 1;
            }
        }
        writeln!(self.output, "\nDone.")?;
        self.output.flush()?;
        Ok(served)
    }

    fn print_predictions(&mut self, x: f64) -> io::Result<()> {
        writeln!(self.output, "\nFor load x = {:.3} we get:", x)?;
        let predictions = self.engine.evaluate_all(&self.metrics, x);
        let mut values = predictions.iter().peekable();
        for name in &self.metrics {
            match values.peek() {
                Some((key, value)) if key == name => {
                    writeln!(self.output, "{}", format_prediction(key, *value))?;
                    values.next();
                }
                _ => writeln!(self.output, "  {} = undefined", name)?,
            }
        }
        Ok(())
    }
}
