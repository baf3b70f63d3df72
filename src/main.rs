use anyhow::Result;
use std::io;
use tracing::info;
use venue_ticketing::config::Settings;
use venue_ticketing::infrastructure::{log_messages, telemetry, ConsoleInput};
use venue_ticketing::SessionController;

fn main() -> Result<()> {
    let settings = Settings::new()?;
    telemetry::init(&settings.logging)?;
    info!("{}", log_messages::application::CONFIG_LOADED);

    info!(
        application = %settings.application.name,
        environment = %settings.application.environment,
        "{}",
        log_messages::application::STARTING
    );

    let stdin = io::stdin();
    let mut input = ConsoleInput::new(stdin.lock(), io::stdout());
    let mut out = io::stdout();

    let mut session = SessionController::new(settings.session);
    session.run(&mut input, &mut out)?;

    Ok(())
}
