use thiserror::Error;

/// Top-level error type for the `cgaled-api` crate.
///
/// Every phase of a run (login, device read/write, logout) surfaces the
/// first error it hits unchanged; the binary maps these into user-facing
/// diagnostics and exit codes.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, timeout, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Data ────────────────────────────────────────────────────────
    /// Response body was not the expected JSON envelope.
    #[error("Decode error: {message}")]
    Decode { message: String },

    /// The gateway reported an application-level failure. The envelope's
    /// `error` field was something other than `"ok"` -- this can happen
    /// on an HTTP 200 response.
    #[error("API error '{code}': {message}")]
    Api { code: String, message: String },

    /// The gateway reported an LED state this client does not recognize
    /// as a boolean. Fails closed rather than guessing.
    #[error("Unrecognized LED state reported by gateway: {value:?}")]
    LedState { value: String },
}
