// Gateway API response types
//
// Every endpoint answers with `error`/`message` fields and, on success,
// its payload fields alongside them at the top level:
// `{ "error": "ok", "message": "...", ...payload fields... }`.
// Failure envelopes carry only `error`/`message` -- the typed payload
// fields are absent -- so decoding happens in two stages: `Status`
// first, then the payload type from the same body. `#[serde(default)]`
// is used liberally because the firmware is inconsistent about field
// presence.

use serde::Deserialize;

use crate::client::CsrfToken;

// ── Response status ──────────────────────────────────────────────────

/// Application-level result fields present on every response.
///
/// `error` == `"ok"` means success; anything else is a failure even
/// when the HTTP status is 200.
#[derive(Debug, Deserialize)]
pub(crate) struct Status {
    pub error: String,
    #[serde(default)]
    pub message: String,
}

// ── Per-endpoint CSRF tokens ─────────────────────────────────────────
//
// Different read endpoints issue independent, non-interchangeable tokens:
// the device-state write wants the token from the device-state read, and
// logout wants the one from the host-table read. Distinct newtypes make
// mixing them up a compile error instead of a 403 in the field.

/// CSRF token issued by `GET /api/v1/set_device`, consumed by the
/// device-state write.
#[derive(Debug, Deserialize)]
pub struct DeviceToken(String);

impl CsrfToken for DeviceToken {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// CSRF token issued by `GET /api/v1/host/hostTbl`, consumed by logout.
#[derive(Debug, Deserialize)]
pub struct HostToken(String);

impl CsrfToken for HostToken {
    fn as_str(&self) -> &str {
        &self.0
    }
}

// ── Endpoint payloads ────────────────────────────────────────────────

/// Salts returned by the salt-probe login request. The real login
/// response decodes into the same shape with both fields empty.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginChallenge {
    #[serde(default)]
    pub salt: String,
    #[serde(default)]
    pub saltwebui: String,
}

/// Payload of `GET /api/v1/set_device`.
#[derive(Debug, Deserialize)]
pub(crate) struct DeviceState {
    pub token: DeviceToken,
    pub data: DeviceStateData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeviceStateData {
    /// Textual boolean ("true"/"false", some firmware uses "1"/"0").
    pub led: String,
    /// Opaque value the gateway expects echoed back verbatim on the
    /// subsequent write. Never interpreted client-side.
    pub http_state: String,
}

/// Payload of `GET /api/v1/host/hostTbl`. The host table itself is not
/// consumed -- the read exists solely to obtain the logout token.
#[derive(Debug, Deserialize)]
pub(crate) struct HostTable {
    pub token: HostToken,
}

/// Payload for endpoints that return nothing beyond the envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct Empty {}
