//! Clap derive structures for the `cgaled` CLI.

use clap::{Parser, ValueEnum};

/// cgaled -- toggle the front LED on a Compal CGA gateway
#[derive(Debug, Parser)]
#[command(
    name = "cgaled",
    version,
    about = "Toggle the LED on a Compal CGA gateway (Vodafone Station)",
    long_about = "Logs in to the gateway's management API via its two-phase \
        challenge-response handshake, flips the LED if it is not already in \
        the requested state, and logs out again."
)]
pub struct Cli {
    /// Desired LED state
    #[arg(value_enum)]
    pub state: LedState,

    /// Gateway address (host or host:port)
    #[arg(long, short = 'a', env = "CGALED_ADDRESS", default_value = cgaled_api::client::DEFAULT_ADDRESS)]
    pub address: String,

    /// Gateway username
    #[arg(long, short = 'u', env = "CGALED_USERNAME", default_value = "admin")]
    pub username: String,

    /// Gateway password
    #[arg(long, short = 'p', env = "CGALED_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Request timeout in seconds
    #[arg(long, env = "CGALED_TIMEOUT", default_value = "30")]
    pub timeout: u64,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LedState {
    /// Turn the LED on
    On,
    /// Turn the LED off
    Off,
}

impl From<LedState> for bool {
    fn from(state: LedState) -> Self {
        matches!(state, LedState::On)
    }
}
