// Gateway HTTP client
//
// Wraps `reqwest::Client` with the fixed browser-mimicking headers, the
// persistent cookie jar the gateway correlates sessions by, and envelope
// decoding. The protocol phases (auth, device) are implemented as
// inherent methods in separate files to keep this module focused on
// transport mechanics.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::SecretString;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::Status;

/// Default gateway address on a factory-configured device.
pub const DEFAULT_ADDRESS: &str = "192.168.100.1";

/// Header carrying the per-request CSRF token on write paths.
const CSRF_HEADER: &str = "X-Csrf-Token";

/// A per-endpoint CSRF token accepted by the gateway's write paths.
///
/// Implemented only by the token newtypes in [`crate::models`]; taking
/// `&impl CsrfToken` at the transport seam keeps raw strings out of the
/// authorization header entirely.
pub trait CsrfToken {
    fn as_str(&self) -> &str;
}

/// Connection parameters for a single run against one gateway.
///
/// Immutable once built; there is no process-wide state.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Gateway host or host:port, no scheme (the API is plain HTTP).
    pub address: String,
    pub username: String,
    pub password: SecretString,
    /// Bound on each request. The device firmware can wedge and hold a
    /// connection open indefinitely, which would otherwise hang the run.
    pub timeout: Duration,
}

impl GatewayConfig {
    pub fn new(address: impl Into<String>, username: impl Into<String>, password: SecretString) -> Self {
        Self {
            address: address.into(),
            username: username.into(),
            password,
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for the gateway's management API.
///
/// Holds the one `reqwest::Client` (and thus the one cookie jar) every
/// request of the run goes through -- the gateway correlates requests by
/// session cookie, not by CSRF token alone. Not intended for concurrent
/// use: the protocol is strictly sequential.
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: Url,
    pub(crate) username: String,
    pub(crate) password: SecretString,
}

impl GatewayClient {
    /// Build a client from a `GatewayConfig`.
    ///
    /// Installs the fixed headers the firmware requires on every request
    /// (it rejects anything that does not look like a browser-originated
    /// AJAX call) and enables the cookie store.
    pub fn new(config: GatewayConfig) -> Result<Self, Error> {
        let base_url = Url::parse(&format!("http://{}/", config.address))?;

        let mut headers = HeaderMap::new();
        headers.insert("X-Requested-With", HeaderValue::from_static("XMLHttpRequest"));

        let http = reqwest::Client::builder()
            .user_agent("Mozilla/5.0")
            .default_headers(headers)
            .cookie_store(true)
            .timeout(config.timeout)
            .build()
            .map_err(Error::Transport)?;

        Ok(Self {
            http,
            base_url,
            username: config.username,
            password: config.password,
        })
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and unwrap the envelope.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.base_url.join(path)?;
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;

        parse_envelope(resp).await
    }

    /// Send a POST request with a URL-encoded form body and unwrap the
    /// envelope. The API is form-based on all write paths despite
    /// answering in JSON.
    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &(impl Serialize + Sync),
    ) -> Result<T, Error> {
        let url = self.base_url.join(path)?;
        debug!("POST {}", url);

        let resp = self
            .http
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(Error::Transport)?;

        parse_envelope(resp).await
    }

    /// Send a POST request authorized by a CSRF token.
    pub(crate) async fn post_form_csrf<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &(impl Serialize + Sync),
        token: &impl CsrfToken,
    ) -> Result<T, Error> {
        let url = self.base_url.join(path)?;
        debug!("POST {} (csrf)", url);

        let resp = self
            .http
            .post(url)
            .header(CSRF_HEADER, token.as_str())
            .form(form)
            .send()
            .await
            .map_err(Error::Transport)?;

        parse_envelope(resp).await
    }
}

/// Check the application-level result of a response, then decode its
/// payload.
///
/// The HTTP status is deliberately not consulted: the firmware reports
/// failures as `error != "ok"` inside an HTTP 200. The status fields
/// are decoded before the payload type because failure envelopes omit
/// the payload fields entirely -- a rejection must surface as an API
/// error carrying the server's code and message, not as a decode
/// failure about a missing `token`.
async fn parse_envelope<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    let body = resp.text().await.map_err(Error::Transport)?;

    let status: Status = serde_json::from_str(&body).map_err(|e| decode_error(&e, &body))?;
    if status.error != "ok" {
        return Err(Error::Api {
            code: status.error,
            message: status.message,
        });
    }

    serde_json::from_str(&body).map_err(|e| decode_error(&e, &body))
}

fn decode_error(err: &serde_json::Error, body: &str) -> Error {
    Error::Decode {
        message: format!("{err} (body preview: {:?})", preview(body)),
    }
}

/// Truncate a body for error previews without splitting a multibyte
/// UTF-8 character (firmware error pages are not always ASCII).
fn preview(body: &str) -> &str {
    let mut end = body.len().min(200);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_leaves_short_bodies_intact() {
        assert_eq!(preview("not json"), "not json");
    }

    #[test]
    fn preview_truncates_on_char_boundary() {
        // 199 ASCII bytes followed by a two-byte character: byte 200
        // falls inside it, so the cut must back up to byte 199.
        let body = format!("{}é tail", "x".repeat(199));
        let p = preview(&body);
        assert_eq!(p.len(), 199);
        assert!(p.chars().all(|c| c == 'x'));
    }
}
