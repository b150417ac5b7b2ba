//! Wordforge - brute-force wordlist generation and size estimation
//!
//! A simple CLI tool that enumerates every word of a length range over a
//! character set and streams the result to a text file, after showing the
//! operator exactly how large that result will be.

pub mod error;
pub mod estimate;
pub mod types;
pub mod wordlist;

// Re-export commonly used types
pub use error::{Result, WordforgeError};
pub use estimate::{estimate, Estimate};
pub use types::{
    Charset, CharsetChoice, GenerationReport, GenerationSpec, DEFAULT_SYMBOLS, MAX_VERBOSITY,
};
pub use wordlist::{generate, words, NullObserver, ProgressObserver, ProgressUpdate};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
