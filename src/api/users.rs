//! User management endpoints.

use super::Client;
use crate::error::Result;
use crate::models::{LoginResponse, User, UserRegistration, UserUpdates};
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use uuid::Uuid;

impl Client {
    /// Create a user account. Anonymous self-registration needs a
    /// registration code when the instance restricts sign-ups;
    /// administrators can call this with their session token instead.
    ///
    /// # Errors
    /// Returns an error if the API rejects the registration.
    pub async fn create_user(&self, registration: &UserRegistration) -> Result<User> {
        self.execute(self.post_maybe_authorized("/users", registration))
            .await
    }

    /// Fetch the account the session token belongs to.
    ///
    /// # Errors
    /// Returns an error without a token or when the token is rejected.
    pub async fn current_user(&self) -> Result<User> {
        self.execute(self.get("/users/@me")?).await
    }

    /// List all user accounts (admin only).
    ///
    /// # Errors
    /// Returns an error without a token or on an API failure.
    pub async fn all_users(&self) -> Result<Vec<User>> {
        self.execute(self.get("/users")?).await
    }

    /// Apply a partial update to a user.
    ///
    /// # Errors
    /// Returns an error without a token or on an API failure.
    pub async fn update_user(&self, user_id: Uuid, updates: &UserUpdates) -> Result<User> {
        self.execute(self.patch(&format!("/users/{user_id}"), updates)?)
            .await
    }

    /// Delete a user and get the removed record back.
    ///
    /// # Errors
    /// Returns an error without a token or on an API failure.
    pub async fn delete_user(&self, user_id: Uuid) -> Result<User> {
        self.execute(self.delete(&format!("/users/{user_id}"))?)
            .await
    }

    /// Start enabling TOTP for a user. The server responds with an MFA flow
    /// that must be completed via [`Client::mfa_verify`] with a code from
    /// the freshly provisioned secret; the flow id is remembered here.
    ///
    /// # Errors
    /// Returns an error without a token or when the password is wrong.
    pub async fn enable_totp(
        &mut self,
        user_id: Uuid,
        password: &SecretString,
    ) -> Result<LoginResponse> {
        let body = json!({ "password": password.expose_secret() });

        let response: LoginResponse = self
            .execute(self.post(&format!("/users/{user_id}/mfa/totp/enable"), &body)?)
            .await?;

        if response.mfa_required {
            self.remember_mfa_flow(response.mfa_flow_id);
        }

        Ok(response)
    }

    /// Disable TOTP for a user, proving possession with either a current
    /// code or the account password.
    ///
    /// # Errors
    /// Returns an error without a token or when the proof is rejected.
    pub async fn disable_totp(
        &self,
        user_id: Uuid,
        code: Option<&str>,
        password: Option<&SecretString>,
    ) -> Result<User> {
        let body = json!({
            "code": code,
            "password": password.map(ExposeSecret::expose_secret),
        });

        self.execute(self.post(&format!("/users/{user_id}/mfa/totp/disable"), &body)?)
            .await
    }
}
