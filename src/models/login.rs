use super::user::User;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of `POST /auth/login`, `POST /auth/mfa`, and the passkey
/// authentication finish call.
///
/// Either a session is established (`token` + `user` present) or a second
/// factor is pending (`mfa_required` with the flow id to complete it).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub mfa_required: bool,
    #[serde(default)]
    pub has_passkeys: bool,
    #[serde(default)]
    pub mfa_flow_id: Option<Uuid>,
}
