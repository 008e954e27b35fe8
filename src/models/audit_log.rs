use super::datetime::WireDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A single audit trail entry. `old_values`/`new_values` are flat
/// field-name-to-value maps the server captured around the change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub entity_id: String,
    pub entity_type: AuditLogEntityType,
    pub action: AuditLogAction,
    pub reason: String,
    pub author_id: Uuid,
    #[serde(default)]
    pub old_values: Option<HashMap<String, String>>,
    #[serde(default)]
    pub new_values: Option<HashMap<String, String>>,
    pub created_at: WireDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditLogAction {
    Create,
    Update,
    Login,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditLogEntityType {
    User,
    Role,
    OAuthApplication,
    Settings,
    RegistrationToken,
    Passkey,
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    #[test]
    fn decodes_enum_variants_and_value_maps() -> Result<()> {
        let value = json!({
            "_id": "1b7e2ca6-6b4f-4ee4-9b3f-1c6a3c8a7f10",
            "entityId": "6a1a9bde-5e10-4b43-9aab-3a2b8e3e3e3e",
            "entityType": "User",
            "action": "Update",
            "reason": "User updated.",
            "authorId": "6a1a9bde-5e10-4b43-9aab-3a2b8e3e3e3e",
            "oldValues": {"disabled": "false"},
            "newValues": {"disabled": "true"},
            "createdAt": {"$date": {"$numberLong": "1700000000000"}}
        });
        let log: AuditLog = serde_json::from_value(value)?;
        assert_eq!(log.entity_type, AuditLogEntityType::User);
        assert_eq!(log.action, AuditLogAction::Update);
        assert_eq!(
            log.new_values.as_ref().and_then(|map| map.get("disabled")),
            Some(&"true".to_string())
        );
        Ok(())
    }
}
