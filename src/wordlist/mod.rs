//! Wordlist enumeration and streaming write
//!
//! Enumeration is odometer order: for each word length, the rightmost
//! symbol position cycles fastest, with the charset's symbol order as the
//! digit order. Lengths run ascending, so every shorter word precedes every
//! longer one.

mod generator;
mod progress;
mod writer;

pub use generator::{word_at, words, LengthIter};
pub use progress::{format_hms, NullObserver, ProgressObserver, ProgressUpdate};
pub use writer::{generate, MILESTONE_INTERVAL};
