//! Error handling for wordforge

use thiserror::Error;

/// Main error type for wordforge
#[derive(Error, Debug, Clone)]
pub enum WordforgeError {
    #[error("Invalid length range: minimum {min} exceeds maximum {max}")]
    InvalidRange { min: usize, max: usize },

    #[error("Character set resolves to zero symbols")]
    EmptyCharset,

    #[error("Invalid option: {message}")]
    InvalidOption { message: String },

    #[error("Invalid output path '{path}': {message}")]
    InvalidPath { path: String, message: String },

    #[error("Write to output failed: {message}")]
    SinkWrite {
        message: String,
        path: Option<String>,
    },

    #[error("Prompt error: {message}")]
    Prompt { message: String },
}

impl WordforgeError {
    /// Create an invalid-range error
    pub fn invalid_range(min: usize, max: usize) -> Self {
        Self::InvalidRange { min, max }
    }

    /// Create an invalid-option error
    pub fn invalid_option(message: impl Into<String>) -> Self {
        Self::InvalidOption {
            message: message.into(),
        }
    }

    /// Create an invalid-path error
    pub fn invalid_path(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a sink-write error
    pub fn sink_write(message: impl Into<String>, path: Option<String>) -> Self {
        Self::SinkWrite {
            message: message.into(),
            path,
        }
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidRange { min, max } => {
                format!(
                    "❌ Invalid length range: minimum {} exceeds maximum {}\n💡 The minimum word length must not exceed the maximum",
                    min, max
                )
            }
            Self::EmptyCharset => {
                "❌ The character set is empty\n💡 Enter at least one symbol to build words from"
                    .to_string()
            }
            Self::InvalidOption { message } => {
                format!("❌ Invalid option: {}\n💡 Pick one of the offered values", message)
            }
            Self::InvalidPath { path, message } => {
                format!("❌ Invalid output path '{}': {}", path, message)
            }
            Self::SinkWrite { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!(
                    "❌ Write error{}: {}\n💡 Check free disk space and file permissions",
                    path_info, message
                )
            }
            Self::Prompt { message } => {
                format!("❌ Input error: {}", message)
            }
        }
    }
}

/// Convert from common error types
impl From<std::io::Error> for WordforgeError {
    fn from(err: std::io::Error) -> Self {
        Self::sink_write(err.to_string(), None)
    }
}

impl From<inquire::InquireError> for WordforgeError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => {
                Self::prompt("operation cancelled")
            }
            other => Self::prompt(other.to_string()),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, WordforgeError>;
