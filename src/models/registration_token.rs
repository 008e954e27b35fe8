use super::datetime::WireDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An invite token gating self-registration.
///
/// `uses` records the ids of users who registered with the token;
/// `auto_roles` are granted to those users on creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationToken {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub code: String,
    pub max_uses: u32,
    #[serde(default)]
    pub uses: Vec<Uuid>,
    #[serde(default)]
    pub auto_roles: Vec<Uuid>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub expires_from: Option<WireDateTime>,
    pub created_at: WireDateTime,
}

impl RegistrationToken {
    /// The shareable registration link for this token, rooted at the portal
    /// origin (trailing slashes are tolerated).
    #[must_use]
    pub fn registration_url(&self, origin: &str) -> String {
        format!(
            "{}/register?registration_code={}",
            origin.trim_end_matches('/'),
            self.code
        )
    }

    /// Expiry instant, if the token expires at all: `expires_from`
    /// (falling back to `created_at`) plus `expires_in` seconds.
    #[must_use]
    pub fn expires_at(&self) -> Option<WireDateTime> {
        self.expires_in
            .map(|seconds| self.expires_from.unwrap_or(self.created_at).plus_seconds(seconds))
    }

    #[must_use]
    pub fn remaining_uses(&self) -> u32 {
        self.max_uses.saturating_sub(self.uses.len() as u32)
    }
}

/// Body for `POST /registration-tokens`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRegistrationToken {
    pub max_uses: u32,
    pub expires_in: Option<u64>,
}

/// Partial update body for `PATCH /registration-tokens/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationTokenUpdates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_roles: Option<Vec<Uuid>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    fn token() -> Result<RegistrationToken> {
        Ok(serde_json::from_value(json!({
            "_id": "0e2e2ca6-6b4f-4ee4-9b3f-1c6a3c8a7f10",
            "code": "WELCOME-2024",
            "maxUses": 5,
            "uses": ["6a1a9bde-5e10-4b43-9aab-3a2b8e3e3e3e"],
            "autoRoles": [],
            "expiresIn": 86400,
            "expiresFrom": {"$date": {"$numberLong": "1700000000000"}},
            "createdAt": {"$date": {"$numberLong": "1699990000000"}}
        }))?)
    }

    #[test]
    fn builds_registration_url() -> Result<()> {
        let token = token()?;
        assert_eq!(
            token.registration_url("https://id.example.com/"),
            "https://id.example.com/register?registration_code=WELCOME-2024"
        );
        Ok(())
    }

    #[test]
    fn expiry_counts_from_expires_from() -> Result<()> {
        let token = token()?;
        let expires_at = token.expires_at().expect("token expires");
        assert_eq!(
            expires_at.timestamp_millis(),
            1_700_000_000_000 + 86_400_000
        );
        Ok(())
    }

    #[test]
    fn no_expiry_without_expires_in() -> Result<()> {
        let mut token = token()?;
        token.expires_in = None;
        assert!(token.expires_at().is_none());
        Ok(())
    }

    #[test]
    fn remaining_uses_never_underflows() -> Result<()> {
        let mut token = token()?;
        token.max_uses = 1;
        token.uses = vec![Uuid::nil(), Uuid::nil()];
        assert_eq!(token.remaining_uses(), 0);
        Ok(())
    }
}
