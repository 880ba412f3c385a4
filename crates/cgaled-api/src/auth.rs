// Session establishment and teardown
//
// Login is a two-phase challenge-response: a probe request with a
// placeholder password coaxes the per-login salts out of the gateway,
// the real credential is derived from them, and a second login request
// submits it. Logout is authorized by a CSRF token that -- per the real
// firmware's quirks -- comes from a read of the host table, a resource
// otherwise unrelated to sessions.

use secrecy::ExposeSecret;
use serde::Serialize;
use tracing::debug;

use crate::challenge::derive_login_password;
use crate::client::GatewayClient;
use crate::error::Error;
use crate::models::{Empty, HostTable, LoginChallenge};

/// Placeholder password of the salt-probe request. Not a credential:
/// its only effect is to make the gateway answer with the salts.
const SALT_PROBE_PASSWORD: &str = "seeksalthash";

#[derive(Serialize)]
struct LoginForm<'a> {
    username: &'a str,
    password: &'a str,
    /// Invalidates any already-active session before this login attempt.
    logout: bool,
}

impl GatewayClient {
    /// Authenticate with the gateway.
    ///
    /// Three strictly ordered steps, each depending on the previous:
    /// salt probe, real login with the derived password (success sets
    /// the session cookie in the jar), and a menu heartbeat that does
    /// nothing but confirm the session is actually usable. The first
    /// failure aborts the login; there is no retry and no cleanup.
    pub async fn login(&self) -> Result<(), Error> {
        debug!("requesting login salts");
        let challenge: LoginChallenge = self
            .post_form(
                "api/v1/session/login",
                &LoginForm {
                    username: &self.username,
                    password: SALT_PROBE_PASSWORD,
                    logout: true,
                },
            )
            .await?;

        let derived = derive_login_password(
            self.password.expose_secret(),
            &challenge.salt,
            &challenge.saltwebui,
        );

        debug!("submitting derived credential");
        let _: LoginChallenge = self
            .post_form(
                "api/v1/session/login",
                &LoginForm {
                    username: &self.username,
                    password: &derived,
                    logout: true,
                },
            )
            .await?;

        // Heartbeat: validates the fresh session, response otherwise unused.
        let _: Empty = self.get("api/v1/session/menu").await?;

        debug!("login successful");
        Ok(())
    }

    /// End the current session.
    ///
    /// The logout endpoint wants a CSRF token, and the only place the
    /// firmware hands one out for it is the host-table read -- not any
    /// token returned during login or the device-state read.
    pub async fn logout(&self) -> Result<(), Error> {
        let host: HostTable = self.get("api/v1/host/hostTbl").await?;

        // The logout request carries no form data, only the token header.
        let empty: [(&str, &str); 0] = [];
        let _: Empty = self
            .post_form_csrf("api/v1/session/logout", &empty, &host.token)
            .await?;

        debug!("logout complete");
        Ok(())
    }
}
