//! The seam between the session and whatever supplies user input

use std::io;
use thiserror::Error;

/// Failure to obtain a value from an [`InputSource`]
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Input exhausted")]
    Exhausted,

    #[error("Expected {field}, got '{token}'")]
    Malformed { field: &'static str, token: String },

    #[error("Input unavailable: {0}")]
    Io(#[from] io::Error),
}

/// Supplier of already-tokenized primitive values
///
/// Prompts are advisory; a non-interactive source may ignore them.
pub trait InputSource {
    fn read_integer(&mut self, prompt: &str) -> Result<i64, InputError>;

    fn read_text(&mut self, prompt: &str) -> Result<String, InputError>;

    /// Drop values already entered but not yet read, such as the rest of a
    /// line whose action was rejected
    fn discard_pending(&mut self) {}
}
