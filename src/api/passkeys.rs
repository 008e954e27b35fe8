//! Passkey endpoints and the two-phase register/authenticate flows.

use super::Client;
use crate::error::Result;
use crate::models::{LoginResponse, Passkey, PasskeyUpdates};
use crate::webauthn::{authentication, registration, CredentialAuthenticator};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

/// Default authenticator kind requested on registration start.
pub const DEFAULT_PASSKEY_TYPE: &str = "virtual";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegisterStart {
    registration_id: Uuid,
    challenge: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthenticateStart {
    authentication_id: Uuid,
    challenge: Value,
}

impl Client {
    /// Register a new passkey for the signed-in user.
    ///
    /// Fetches the server challenge, prepares it for the authenticator
    /// (field rewrites + base64url decoding), asks the authenticator to
    /// create a credential, and posts the encoded result back.
    ///
    /// # Errors
    /// Returns an error without a token, on a malformed challenge, when the
    /// authenticator refuses, or on an API failure.
    pub async fn register_passkey(
        &self,
        authenticator: &mut dyn CredentialAuthenticator,
        key_type: &str,
    ) -> Result<Passkey> {
        let start: RegisterStart = self
            .execute(self.get(&format!("/passkeys/register/start?type={key_type}"))?)
            .await?;

        debug!("passkey registration {}", start.registration_id);

        let options = registration::prepare(&start.challenge)?;
        let credential = authenticator.create(&options)?;
        let payload = registration::finish_payload(start.registration_id, &credential);

        self.execute(self.post("/passkeys/register/finish", &payload)?)
            .await
    }

    /// Sign in with a passkey instead of a password. On success the issued
    /// session token is stored on the client, exactly like a password login.
    ///
    /// # Errors
    /// Returns an error on a malformed challenge, when the authenticator
    /// refuses, or on an API failure.
    pub async fn authenticate_with_passkey(
        &mut self,
        authenticator: &mut dyn CredentialAuthenticator,
    ) -> Result<LoginResponse> {
        let start: AuthenticateStart = self
            .execute(self.get_public("/auth/passkeys/authenticate/start"))
            .await?;

        debug!("passkey authentication {}", start.authentication_id);

        let options = authentication::prepare(&start.challenge)?;
        let credential = authenticator.get(&options)?;
        let payload = authentication::finish_payload(start.authentication_id, &credential);

        let response: LoginResponse = self
            .execute(self.post_public("/auth/passkeys/authenticate/finish", &payload))
            .await?;

        self.adopt_session(&response);

        Ok(response)
    }

    /// # Errors
    /// Returns an error without a token or on an API failure.
    pub async fn user_passkeys(&self, user_id: Uuid) -> Result<Vec<Passkey>> {
        self.execute(self.get(&format!("/users/{user_id}/passkeys"))?)
            .await
    }

    /// List every registered passkey on the instance (admin only).
    ///
    /// # Errors
    /// Returns an error without a token or on an API failure.
    pub async fn all_passkeys(&self) -> Result<Vec<Passkey>> {
        self.execute(self.get("/passkeys")?).await
    }

    /// # Errors
    /// Returns an error without a token or on an API failure.
    pub async fn update_passkey(
        &self,
        passkey_id: Uuid,
        updates: &PasskeyUpdates,
    ) -> Result<Passkey> {
        self.execute(self.patch(&format!("/passkeys/{passkey_id}"), updates)?)
            .await
    }

    /// # Errors
    /// Returns an error without a token or on an API failure.
    pub async fn delete_passkey(&self, passkey_id: Uuid) -> Result<()> {
        self.execute_unit(self.delete(&format!("/passkeys/{passkey_id}"))?)
            .await
    }
}
