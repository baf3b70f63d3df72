use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub session: SessionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationSettings {
    pub name: String,
    pub environment: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    /// Keep the last generated ticket as the session's current ticket
    pub retain_generated_ticket: bool,
    /// Print the menu before every choice
    pub show_menu: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            retain_generated_ticket: true,
            show_menu: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Settings {
    /// Load settings relative to the `config/` directory of the working directory
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Defaults, then `default`, `{ENVIRONMENT}` and `local` files from
    /// `config_dir`, then `VENUE_TICKETING__*` environment variables
    pub fn load_from(config_dir: &Path) -> Result<Self, ConfigError> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let file = |name: &str| File::from(config_dir.join(name)).required(false);

        let config = Config::builder()
            .set_default("application.name", env!("CARGO_PKG_NAME"))?
            .set_default("application.environment", environment.clone())?
            .set_default("session.retain_generated_ticket", true)?
            .set_default("session.show_menu", true)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .add_source(file("default"))
            .add_source(file(&environment))
            .add_source(file("local"))
            .add_source(Environment::with_prefix("VENUE_TICKETING").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
