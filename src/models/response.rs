use serde::{Deserialize, Serialize};

/// Response envelope used by almost every endpoint.
///
/// Success responses carry the payload under `data`; error responses repeat
/// the HTTP status and a human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}
