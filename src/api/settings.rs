//! Instance settings endpoints.

use super::Client;
use crate::error::Result;
use crate::models::{Settings, SettingsUpdates};

impl Client {
    /// Fetch instance settings. Public: the login and registration screens
    /// need these before any session exists.
    ///
    /// # Errors
    /// Returns an error on an API failure.
    pub async fn get_settings(&self) -> Result<Settings> {
        self.execute(self.get_public("/settings")).await
    }

    /// Update instance settings (admin only). Note the distinct `/admin`
    /// prefix on the write path.
    ///
    /// # Errors
    /// Returns an error without a token or on an API failure.
    pub async fn update_settings(&self, updates: &SettingsUpdates) -> Result<Settings> {
        self.execute(self.patch("/admin/settings", updates)?).await
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
    async fn update_uses_admin_prefix() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/admin/settings"))
            .and(body_json(json!({
                "allowRegistration": false,
                "allowOauthAppsForUsers": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 200,
                "message": "Settings updated",
                "data": {
                    "_id": "00000000-0000-0000-0000-000000000001",
                    "allowRegistration": false,
                    "allowOauthAppsForUsers": true
                }
            })))
            .mount(&server)
            .await;

        let client = Client::with_token(&server.uri(), SecretString::from("session-token"))?;
        let updates = SettingsUpdates {
            allow_registration: false,
            allow_oauth_apps_for_users: true,
        };
        let settings = client.update_settings(&updates).await?;
        assert!(!settings.allow_registration);
        Ok(())
    }
}
