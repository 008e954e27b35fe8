//! OAuth application management endpoints.

use super::Client;
use crate::error::Result;
use crate::models::{OAuthApplication, OAuthApplicationUpdates};
use serde_json::json;
use uuid::Uuid;

impl Client {
    /// Register a new OAuth application. The response is the only place the
    /// client secret is ever returned.
    ///
    /// # Errors
    /// Returns an error without a token or on an API failure.
    pub async fn create_application(
        &self,
        name: &str,
        description: Option<&str>,
        redirect_uris: &[String],
    ) -> Result<OAuthApplication> {
        let body = json!({
            "name": name,
            "description": description,
            "redirectUris": redirect_uris,
        });

        self.execute(self.post("/oauth-applications", &body)?)
            .await
    }

    /// # Errors
    /// Returns an error without a token or on an API failure.
    pub async fn get_application(&self, application_id: Uuid) -> Result<OAuthApplication> {
        self.execute(self.get(&format!("/oauth-applications/{application_id}"))?)
            .await
    }

    /// # Errors
    /// Returns an error without a token or on an API failure.
    pub async fn all_applications(&self) -> Result<Vec<OAuthApplication>> {
        self.execute(self.get("/oauth-applications")?).await
    }

    /// # Errors
    /// Returns an error without a token or on an API failure.
    pub async fn update_application(
        &self,
        application_id: Uuid,
        updates: &OAuthApplicationUpdates,
    ) -> Result<OAuthApplication> {
        self.execute(self.patch(&format!("/oauth-applications/{application_id}"), updates)?)
            .await
    }

    /// # Errors
    /// Returns an error without a token or on an API failure.
    pub async fn delete_application(&self, application_id: Uuid) -> Result<OAuthApplication> {
        self.execute(self.delete(&format!("/oauth-applications/{application_id}"))?)
            .await
    }
}
