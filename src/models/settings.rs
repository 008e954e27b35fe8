use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Instance-wide settings. Readable without authentication; writable only by
/// administrators via `PATCH /admin/settings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub allow_registration: bool,
    pub allow_oauth_apps_for_users: bool,
}

/// Full replacement body for the settings update call; both flags are always
/// sent, mirroring the admin form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdates {
    pub allow_registration: bool,
    pub allow_oauth_apps_for_users: bool,
}
