use crate::application::input::InputError;
use thiserror::Error;

/// Venue ticketing application error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Telemetry initialization failed: {0}")]
    Telemetry(String),
}

impl Error {
    pub fn telemetry(message: impl Into<String>) -> Self {
        Self::Telemetry(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
