mod cli;
mod error;

use std::time::Duration;

use clap::Parser;
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

use cgaled_api::{GatewayClient, GatewayConfig, LedOutcome};

use crate::cli::Cli;
use crate::error::{CliError, Phase};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

/// Run the whole sequence: login, conditional LED write, logout.
///
/// Strictly sequential and fail-fast: the first error terminates the run
/// with that phase's diagnostic. No logout is attempted after a
/// mid-sequence failure, so a failed write can leave a session open on
/// the gateway until it expires.
async fn run(cli: Cli) -> Result<(), CliError> {
    let desired: bool = cli.state.into();
    let address = cli.address.clone();

    let config = GatewayConfig {
        address: cli.address,
        username: cli.username,
        password: SecretString::from(cli.password),
        timeout: Duration::from_secs(cli.timeout),
    };
    let client = GatewayClient::new(config).map_err(CliError::InvalidAddress)?;

    tracing::info!(%address, desired, "connecting to gateway");

    client
        .login()
        .await
        .map_err(|e| CliError::from_phase(Phase::Login, &address, e))?;

    let outcome = client
        .set_led(desired)
        .await
        .map_err(|e| CliError::from_phase(Phase::SetLed, &address, e))?;

    client
        .logout()
        .await
        .map_err(|e| CliError::from_phase(Phase::Logout, &address, e))?;

    if !cli.quiet {
        let word = if desired { "on" } else { "off" };
        match outcome {
            LedOutcome::Unchanged => println!("LED already {word}"),
            LedOutcome::Updated => println!("LED turned {word}"),
        }
    }

    Ok(())
}
