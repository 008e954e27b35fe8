//! OAuth authorization on behalf of the signed-in user.

use super::Client;
use crate::error::Result;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

/// Response of `POST /oauth/authorize`. This endpoint predates the response
/// envelope and returns its payload bare.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationGrant {
    pub client_id: Uuid,
    pub redirect_uri: String,
    pub code: u32,
}

impl AuthorizationGrant {
    /// The redirect target carrying the authorization code back to the
    /// application.
    #[must_use]
    pub fn redirect_url(&self) -> String {
        format!("{}?code={}", self.redirect_uri, self.code)
    }
}

impl Client {
    /// Grant an application the requested scopes and obtain an
    /// authorization code for its redirect URI.
    ///
    /// Scope strings are passed through verbatim; callers wanting early
    /// feedback can check them against
    /// [`crate::models::scopes::invalid_scopes`] first.
    ///
    /// # Errors
    /// Returns an error without a token, for an unknown application, or for
    /// a redirect URI the application has not registered.
    pub async fn authorize(
        &self,
        client_id: Uuid,
        redirect_uri: &str,
        scope: &[String],
    ) -> Result<AuthorizationGrant> {
        let body = json!({
            "clientId": client_id,
            "redirectUri": redirect_uri,
            "scope": scope,
        });

        self.execute_raw(self.post("/oauth/authorize", &body)?)
            .await
    }
}
