//! CLI error types with miette diagnostics.
//!
//! Maps `cgaled_api::Error` into user-facing errors with actionable help
//! text, keyed by the phase of the run that failed.

use miette::Diagnostic;
use thiserror::Error;

/// Exit codes for process termination. Success is 0, clap usage errors
/// exit 2 on their own.
pub mod exit_code {
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const API: i32 = 4;
    pub const PARSE: i32 = 5;
    pub const CONNECTION: i32 = 7;
}

/// Which phase of the run an error came from. Failure is terminal:
/// the remaining phases are skipped and no cleanup logout is attempted.
#[derive(Debug, Clone, Copy)]
pub enum Phase {
    Login,
    SetLed,
    Logout,
}

impl Phase {
    fn name(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::SetLed => "device write",
            Self::Logout => "logout",
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("Could not reach gateway at {address}")]
    #[diagnostic(
        code(cgaled::connection_failed),
        help(
            "Check that the gateway is powered on and reachable.\n\
             Address: {address} (override with --address)"
        )
    )]
    ConnectionFailed {
        address: String,
        #[source]
        source: cgaled_api::Error,
    },

    #[error("Authentication failed: {code}: {message}")]
    #[diagnostic(
        code(cgaled::auth_failed),
        help(
            "Verify the password (printed on the gateway's label unless changed)\n\
             and the username (--username, default 'admin')."
        )
    )]
    AuthFailed { code: String, message: String },

    #[error("Gateway rejected the {phase} request: {code}: {message}")]
    #[diagnostic(code(cgaled::api_error))]
    ApiError {
        phase: &'static str,
        code: String,
        message: String,
    },

    #[error("Gateway reported an unrecognized LED state: {value:?}")]
    #[diagnostic(
        code(cgaled::led_format),
        help(
            "The firmware changed its LED state representation; refusing to\n\
             guess. Please report this value."
        )
    )]
    LedFormat { value: String },

    #[error("Malformed response during {phase}: {message}")]
    #[diagnostic(
        code(cgaled::decode),
        help("The address may not point at a CGA gateway management API.")
    )]
    Decode { phase: &'static str, message: String },

    #[error("Invalid gateway address: {0}")]
    #[diagnostic(code(cgaled::invalid_address), help("Expected a host or host:port, no scheme."))]
    InvalidAddress(#[source] cgaled_api::Error),
}

impl CliError {
    /// Classify an API-crate error by the phase it occurred in.
    pub fn from_phase(phase: Phase, address: &str, err: cgaled_api::Error) -> Self {
        match err {
            cgaled_api::Error::Transport(_) => Self::ConnectionFailed {
                address: address.to_owned(),
                source: err,
            },
            cgaled_api::Error::Api { code, message } => match phase {
                Phase::Login => Self::AuthFailed { code, message },
                Phase::SetLed | Phase::Logout => Self::ApiError {
                    phase: phase.name(),
                    code,
                    message,
                },
            },
            cgaled_api::Error::LedState { value } => Self::LedFormat { value },
            cgaled_api::Error::Decode { message } => Self::Decode {
                phase: phase.name(),
                message,
            },
            cgaled_api::Error::InvalidUrl(_) => Self::InvalidAddress(err),
        }
    }

    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } => exit_code::AUTH,
            Self::ApiError { .. } => exit_code::API,
            Self::LedFormat { .. } | Self::Decode { .. } => exit_code::PARSE,
            Self::InvalidAddress(_) => exit_code::USAGE,
        }
    }
}
