//! Interactive collection of equation coefficients.
//!
//! [`Prompt`] asks for one value at a time over any [`BufRead`]/[`Write`]
//! pair, so the same code drives a terminal and in-memory buffers in tests.
//! Each value gets a bounded number of tries; after a rejected line the rest
//! of that line is discarded and the user is asked again.

use std::io::{self, BufRead, Write};

use log::{debug, warn};
use thiserror::Error;

use crate::{
    models::algebra::quadratic::Coefficients,
    support::constraint::{Constrained, ConstraintResult, Finite, StrictlyPositive},
};

/// Configuration for a [`Prompt`].
#[derive(Debug, Clone, Copy)]
pub struct PromptConfig {
    /// Number of tries allowed for each value.
    pub max_tries: Constrained<usize, StrictlyPositive>,
}

impl PromptConfig {
    /// Creates a configuration allowing `max_tries` tries per value.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_tries` is zero.
    pub fn new(max_tries: usize) -> ConstraintResult<Self> {
        Ok(Self {
            max_tries: StrictlyPositive::new(max_tries)?,
        })
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self::new(3).expect("three tries is strictly positive")
    }
}

/// Errors that can occur while collecting a value.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Every try produced input that is not a finite real number.
    #[error("no valid value for {name} after {tries} tries")]
    TriesExhausted {
        /// Name of the requested value.
        name: String,

        /// Number of rejected tries.
        tries: usize,
    },

    /// The input stream ended before a value was read.
    #[error("input ended before a value for {name} was entered")]
    EndOfInput {
        /// Name of the requested value.
        name: String,
    },

    /// Reading from the input or writing to the output failed.
    #[error("console I/O failed")]
    Io(#[from] io::Error),
}

/// Line-oriented prompt for real-number values.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use solve_square::support::prompt::{Prompt, PromptConfig};
///
/// let mut output = Vec::new();
/// let mut prompt = Prompt::new(Cursor::new("oops\n2.5\n"), &mut output, PromptConfig::default());
///
/// assert_eq!(prompt.read_coefficient("A").unwrap(), 2.5);
/// ```
#[derive(Debug)]
pub struct Prompt<R, W> {
    input: R,
    output: W,
    config: PromptConfig,
    line: String,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Creates a prompt reading from `input` and writing to `output`.
    pub fn new(input: R, output: W, config: PromptConfig) -> Self {
        Self {
            input,
            output,
            config,
            line: String::new(),
        }
    }

    /// Reads the coefficients `A`, `B`, and `C`, in that order.
    ///
    /// # Errors
    ///
    /// Returns the first [`PromptError`] encountered.
    pub fn read_coefficients(&mut self) -> Result<Coefficients<f64>, PromptError> {
        let a = self.read_finite("A")?;
        let b = self.read_finite("B")?;
        let c = self.read_finite("C")?;
        Ok(Coefficients::from_constrained(a, b, c))
    }

    /// Prompts for a single finite real number named `name`.
    ///
    /// Blank lines are skipped without using up a try.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::TriesExhausted`] when every try is rejected,
    /// [`PromptError::EndOfInput`] if the input ends first, or
    /// [`PromptError::Io`] on I/O failure.
    pub fn read_coefficient(&mut self, name: &str) -> Result<f64, PromptError> {
        self.read_finite(name).map(Constrained::into_inner)
    }

    /// Consumes the prompt and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_finite(&mut self, name: &str) -> Result<Constrained<f64, Finite>, PromptError> {
        let max_tries = *self.config.max_tries.as_ref();

        for tries in 1..=max_tries {
            write!(self.output, "#--- Enter a real-number value for {name}> ")?;
            self.output.flush()?;

            if !self.next_token()? {
                return Err(PromptError::EndOfInput { name: name.into() });
            }

            let token = self.line.trim();
            match parse_finite(token) {
                Some(value) => {
                    debug!("read {name} = {}", value.as_ref());
                    return Ok(value);
                }
                None => warn!("rejected input {token:?} for {name} (try {tries} of {max_tries})"),
            }

            write!(self.output, "#--- Incorrect input!")?;
            if tries < max_tries {
                writeln!(self.output, " Let's try again!")?;
            } else {
                writeln!(self.output, " That was last try :(")?;
            }
        }

        Err(PromptError::TriesExhausted {
            name: name.into(),
            tries: max_tries,
        })
    }

    /// Reads lines until one is not blank.
    ///
    /// Returns `false` at end of input.
    fn next_token(&mut self) -> io::Result<bool> {
        loop {
            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Ok(false);
            }
            if !self.line.trim().is_empty() {
                return Ok(true);
            }
        }
    }
}

fn parse_finite(token: &str) -> Option<Constrained<f64, Finite>> {
    token
        .parse::<f64>()
        .ok()
        .and_then(|value| Finite::new(value).ok())
}
