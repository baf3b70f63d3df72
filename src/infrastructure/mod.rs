//! Infrastructure layer for venue ticketing
//!
//! Console input, logging setup and the log message catalogue.

pub mod console;
pub mod log_messages;
pub mod telemetry;

pub use console::{ConsoleInput, ScriptedInput};
