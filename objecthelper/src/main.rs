use clap::Parser;
use objecthelper::{cli::Cli, commands};
use std::process::ExitCode;
use tracing::{debug, error, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // A missing .env is fine
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    // RUST_LOG wins over -v/-q when set
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.log_level().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("Parsed command line: {:?}", cli.command);

    match commands::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_nothing_generated() => {
            warn!("Nothing generated: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
