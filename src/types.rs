//! Core types and structures for wordforge

use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::error::{Result, WordforgeError};

/// Highest accepted verbosity level.
///
/// Levels 2, 4 and 5 are valid input but currently add nothing over what
/// levels 1 and 3 already print.
pub const MAX_VERBOSITY: u8 = 5;

/// Symbols of the built-in character set, in enumeration order:
/// lowercase letters, uppercase letters, digits, punctuation, space.
pub const DEFAULT_SYMBOLS: &str = "abcdefghijklmnopqrstuvwxyz\
ABCDEFGHIJKLMNOPQRSTUVWXYZ\
0123456789\
!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~ ";

/// Charset selection offered by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharsetChoice {
    /// Built-in set: letters, digits, punctuation, space
    Default,
    /// User-supplied string of symbols
    Custom,
}

impl std::fmt::Display for CharsetChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharsetChoice::Default => write!(f, "Default (letters, digits, punctuation, space)"),
            CharsetChoice::Custom => write!(f, "Custom symbols"),
        }
    }
}

/// Ordered, deduplicated set of symbols used to build words.
///
/// Symbol order matters: it defines the digit order of the enumeration, so
/// two charsets with the same symbols in different order produce differently
/// ordered wordlists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    symbols: Vec<char>,
}

impl Charset {
    /// The built-in 95-symbol set
    pub fn default_set() -> Self {
        Self::from_symbols(DEFAULT_SYMBOLS)
    }

    /// Build a charset from arbitrary symbols, keeping first occurrences only
    pub fn from_symbols(symbols: &str) -> Self {
        let mut seen = Vec::new();
        for c in symbols.chars() {
            if !seen.contains(&c) {
                seen.push(c);
            }
        }
        Self { symbols: seen }
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::default_set()
    }
}

/// Parameters of one generation run.
///
/// Immutable once constructed; lives for a single program invocation.
#[derive(Debug, Clone)]
pub struct GenerationSpec {
    /// Shortest word length to emit
    pub min_length: usize,
    /// Longest word length to emit (inclusive)
    pub max_length: usize,
    /// Symbols to build words from
    pub charset: Charset,
    /// Progress verbosity, 0 (silent) to [`MAX_VERBOSITY`]
    pub verbosity: u8,
}

impl GenerationSpec {
    /// Create a spec, rejecting invalid parameter combinations
    pub fn new(min_length: usize, max_length: usize, charset: Charset, verbosity: u8) -> Result<Self> {
        let spec = Self {
            min_length,
            max_length,
            charset,
            verbosity,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Check the spec invariants
    pub fn validate(&self) -> Result<()> {
        if self.min_length > self.max_length {
            return Err(WordforgeError::invalid_range(self.min_length, self.max_length));
        }
        if self.charset.is_empty() {
            return Err(WordforgeError::EmptyCharset);
        }
        if self.verbosity > MAX_VERBOSITY {
            return Err(WordforgeError::invalid_option(format!(
                "verbosity {} is outside 0..={}",
                self.verbosity, MAX_VERBOSITY
            )));
        }
        Ok(())
    }
}

/// Summary of a completed generation run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Number of words written to the sink
    pub words_generated: u64,
    /// Wall-clock duration of the run
    pub elapsed: Duration,
    /// Run start time
    pub started_at: DateTime<Utc>,
    /// Run completion time
    pub finished_at: DateTime<Utc>,
}
