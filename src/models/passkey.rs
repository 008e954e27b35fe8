use super::datetime::WireDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered passkey, reduced to the fields the API exposes. The
/// credential material itself never leaves the server.
///
/// The registration-finish response omits `owner`/`deviceType`, so those are
/// optional here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passkey {
    pub id: Uuid,
    #[serde(default)]
    pub owner: Option<Uuid>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub device_type: Option<String>,
    pub created_at: WireDateTime,
}

/// Partial update body for `PATCH /passkeys/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasskeyUpdates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
