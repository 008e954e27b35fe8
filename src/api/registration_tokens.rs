//! Registration (invite) token endpoints.

use super::Client;
use crate::error::Result;
use crate::models::{NewRegistrationToken, RegistrationToken, RegistrationTokenUpdates};
use uuid::Uuid;

impl Client {
    /// # Errors
    /// Returns an error without a token or on an API failure.
    pub async fn create_registration_token(
        &self,
        max_uses: u32,
        expires_in: Option<u64>,
    ) -> Result<RegistrationToken> {
        let body = NewRegistrationToken {
            max_uses,
            expires_in,
        };

        self.execute(self.post("/registration-tokens", &body)?)
            .await
    }

    /// # Errors
    /// Returns an error without a token or on an API failure.
    pub async fn get_registration_token(&self, token_id: Uuid) -> Result<RegistrationToken> {
        self.execute(self.get(&format!("/registration-tokens/{token_id}"))?)
            .await
    }

    /// # Errors
    /// Returns an error without a token or on an API failure.
    pub async fn all_registration_tokens(&self) -> Result<Vec<RegistrationToken>> {
        self.execute(self.get("/registration-tokens")?).await
    }

    /// # Errors
    /// Returns an error without a token or on an API failure.
    pub async fn update_registration_token(
        &self,
        token_id: Uuid,
        updates: &RegistrationTokenUpdates,
    ) -> Result<RegistrationToken> {
        self.execute(self.patch(&format!("/registration-tokens/{token_id}"), updates)?)
            .await
    }

    /// # Errors
    /// Returns an error without a token or on an API failure.
    pub async fn delete_registration_token(&self, token_id: Uuid) -> Result<RegistrationToken> {
        self.execute(self.delete(&format!("/registration-tokens/{token_id}"))?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use secrecy::SecretString;
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    #[tokio::test]
    async fn create_sends_max_uses_and_expiry() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/registration-tokens"))
            .and(body_json(json!({"maxUses": 5, "expiresIn": 86400})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 200,
                "message": "Registration token created",
                "data": {
                    "_id": "0e2e2ca6-6b4f-4ee4-9b3f-1c6a3c8a7f10",
                    "code": "WELCOME-2024",
                    "maxUses": 5,
                    "uses": [],
                    "autoRoles": [],
                    "expiresIn": 86400,
                    "expiresFrom": null,
                    "createdAt": {"$date": {"$numberLong": "1700000000000"}}
                }
            })))
            .mount(&server)
            .await;

        let client = Client::with_token(&server.uri(), SecretString::from("session-token"))?;
        let token = client.create_registration_token(5, Some(86_400)).await?;
        assert_eq!(token.code, "WELCOME-2024");
        assert_eq!(token.remaining_uses(), 5);
        Ok(())
    }
}
