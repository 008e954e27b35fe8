use super::{datetime::WireDateTime, oauth_application::OAuthApplication};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authorized OAuth connection between a user and an application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub application: OAuthApplication,
    pub user_id: Uuid,
    pub scope: Vec<String>,
    pub expires_in: u64,
    pub created_at: WireDateTime,
}

impl Connection {
    /// When the underlying token expires: `created_at + expires_in` seconds.
    #[must_use]
    pub fn expires_at(&self) -> WireDateTime {
        self.created_at.plus_seconds(self.expires_in)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    #[test]
    fn expiry_derives_from_created_at() -> Result<()> {
        let value = json!({
            "_id": "7c8c8a9a-1234-4a8a-a07d-5f8e6e0a5b11",
            "application": {
                "_id": "95a9e8a0-8b1f-4a8a-a07d-5f8e6e0a5b11",
                "name": "dashboard",
                "redirectUris": [],
                "owner": "6a1a9bde-5e10-4b43-9aab-3a2b8e3e3e3e",
                "createdAt": {"$date": {"$numberLong": "1700000000000"}}
            },
            "userId": "6a1a9bde-5e10-4b43-9aab-3a2b8e3e3e3e",
            "scope": ["user:read"],
            "expiresIn": 3600,
            "createdAt": {"$date": {"$numberLong": "1700000000000"}}
        });
        let connection: Connection = serde_json::from_value(value)?;
        assert_eq!(
            connection.expires_at().timestamp_millis(),
            1_700_000_000_000 + 3_600_000
        );
        Ok(())
    }
}
