//! Login and MFA verification.

use super::Client;
use crate::error::{Error, Result};
use crate::models::LoginResponse;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::debug;

impl Client {
    /// Authenticate with email and password.
    ///
    /// On a full login the session token is stored on the client. When the
    /// account has TOTP enabled the response carries `mfa_required` and the
    /// flow id is remembered for [`Client::mfa_verify`]; no token is issued
    /// yet.
    ///
    /// # Errors
    /// Returns an error on bad credentials, a disabled account, or transport
    /// failure.
    pub async fn login(&mut self, email: &str, password: &SecretString) -> Result<LoginResponse> {
        let body = json!({
            "email": email,
            "password": password.expose_secret(),
        });

        let response: LoginResponse = self
            .execute(self.post_public("/auth/login", &body))
            .await?;

        if response.mfa_required {
            debug!("MFA required, flow {:?}", response.mfa_flow_id);
            self.remember_mfa_flow(response.mfa_flow_id);
        } else {
            self.adopt_session(&response);
        }

        Ok(response)
    }

    /// Complete the pending MFA flow with a TOTP code and store the issued
    /// session token.
    ///
    /// # Errors
    /// Returns [`Error::NoMfaFlow`] when no login is waiting on a second
    /// factor, or the API's error for an invalid or expired code.
    pub async fn mfa_verify(&mut self, code: &str) -> Result<LoginResponse> {
        let flow_id = self.pending_mfa_flow().ok_or(Error::NoMfaFlow)?;

        let body = json!({
            "flowId": flow_id,
            "code": code,
        });

        let response: LoginResponse = self.execute(self.post_public("/auth/mfa", &body)).await?;

        self.remember_mfa_flow(None);
        self.adopt_session(&response);

        Ok(response)
    }

    /// Drop the in-memory session token and any pending MFA flow.
    pub fn logout(&mut self) {
        self.set_token(None);
        self.remember_mfa_flow(None);
    }

    pub(crate) fn adopt_session(&mut self, response: &LoginResponse) {
        if let Some(token) = &response.token {
            self.set_token(Some(SecretString::from(token.clone())));
        }
    }
}
