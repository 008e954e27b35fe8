//! Audit trail endpoints.

use super::Client;
use crate::error::Result;
use crate::models::AuditLog;
use uuid::Uuid;

impl Client {
    /// Fetch audit logs: the whole instance trail, or a single user's when
    /// `user_id` is given.
    ///
    /// # Errors
    /// Returns an error without a token or on an API failure.
    pub async fn audit_logs(&self, user_id: Option<Uuid>) -> Result<Vec<AuditLog>> {
        let path = match user_id {
            Some(id) => format!("/users/{id}/audit-logs"),
            None => "/audit-logs".to_string(),
        };

        self.execute(self.get(&path)?).await
    }
}
