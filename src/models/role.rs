use super::datetime::WireDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A role. System roles are seeded by the server and cannot be deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub system: bool,
    pub created_at: WireDateTime,
}

/// Partial update body for `PATCH /roles/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleUpdates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
