//! Role management endpoints.

use super::Client;
use crate::error::Result;
use crate::models::{Role, RoleUpdates};
use serde_json::json;
use uuid::Uuid;

impl Client {
    /// # Errors
    /// Returns an error without a token or on an API failure.
    pub async fn create_role(&self, name: &str) -> Result<Role> {
        self.execute(self.post("/roles", &json!({ "name": name }))?)
            .await
    }

    /// # Errors
    /// Returns an error without a token or on an API failure.
    pub async fn all_roles(&self) -> Result<Vec<Role>> {
        self.execute(self.get("/roles")?).await
    }

    /// # Errors
    /// Returns an error without a token or on an API failure.
    pub async fn get_role(&self, role_id: Uuid) -> Result<Role> {
        self.execute(self.get(&format!("/roles/{role_id}"))?).await
    }

    /// # Errors
    /// Returns an error without a token or on an API failure. System roles
    /// are rejected server-side.
    pub async fn update_role(&self, role_id: Uuid, updates: &RoleUpdates) -> Result<Role> {
        self.execute(self.patch(&format!("/roles/{role_id}"), updates)?)
            .await
    }

    /// # Errors
    /// Returns an error without a token or on an API failure. System roles
    /// are rejected server-side.
    pub async fn delete_role(&self, role_id: Uuid) -> Result<Role> {
        self.execute(self.delete(&format!("/roles/{role_id}"))?)
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
    async fn create_sends_name_and_parses_role() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/roles"))
            .and(body_json(json!({"name": "auditor"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 200,
                "message": "Role created",
                "data": {
                    "_id": "0e2e2ca6-6b4f-4ee4-9b3f-1c6a3c8a7f10",
                    "name": "auditor",
                    "system": false,
                    "createdAt": {"$date": {"$numberLong": "1700000000000"}}
                }
            })))
            .mount(&server)
            .await;

        let client = Client::with_token(&server.uri(), SecretString::from("session-token"))?;
        let role = client.create_role("auditor").await?;
        assert_eq!(role.name, "auditor");
        assert!(!role.system);
        Ok(())
    }
}
