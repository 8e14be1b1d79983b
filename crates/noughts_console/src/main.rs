//! Noughts and crosses in the terminal.

use anyhow::Result;
use clap::Parser;
use noughts_console::{Cli, Console, Settings, build_rng, run};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing();

    let settings = Settings::discover(cli.config.as_deref())?.with_overrides(cli.players, cli.seed)?;
    let mut rng = build_rng(*settings.seed());

    let mut console = Console::new(std::io::stdin().lock(), std::io::stdout().lock());
    let end = run(&settings, &mut console, &mut rng)?;
    info!(?end, "Exiting");

    Ok(())
}

/// Logs to stderr so the board on stdout stays clean.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
