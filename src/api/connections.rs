//! OAuth connections of a user.

use super::Client;
use crate::error::Result;
use crate::models::Connection;
use uuid::Uuid;

impl Client {
    /// List the OAuth applications a user has authorized.
    ///
    /// # Errors
    /// Returns an error without a token or on an API failure.
    pub async fn user_connections(&self, user_id: Uuid) -> Result<Vec<Connection>> {
        self.execute(self.get(&format!("/users/{user_id}/connections"))?)
            .await
    }

    /// Revoke a connection. The path parameter is the *application* id, not
    /// the connection id; the server resolves the connection for the
    /// calling user.
    ///
    /// # Errors
    /// Returns an error without a token or on an API failure.
    pub async fn disconnect(&self, application_id: Uuid) -> Result<()> {
        self.execute_unit(self.delete(&format!("/connections/{application_id}"))?)
            .await
    }
}
