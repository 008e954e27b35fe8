//! Marshalling for the passkey registration leg.

use super::encoding;
use crate::error::{Error, Result};
use serde_json::{json, Value};
use uuid::Uuid;

/// Registration options prepared for a credential authenticator: the binary
/// fields decoded, plus the rewritten `publicKey` JSON for implementations
/// that pass it through to a platform API.
#[derive(Debug, Clone)]
pub struct CreationOptions {
    pub challenge: Vec<u8>,
    pub user_id: Vec<u8>,
    pub exclude_credential_ids: Vec<Vec<u8>>,
    pub public_key: Value,
}

/// A credential freshly created by an authenticator.
#[derive(Debug, Clone)]
pub struct CreatedCredential {
    pub id: String,
    pub raw_id: Vec<u8>,
    pub client_data_json: Vec<u8>,
    pub attestation_object: Vec<u8>,
}

/// Prepare the server's registration challenge for an authenticator.
///
/// Rewrites applied to `publicKey`:
/// - `authenticatorSelection.authenticatorAttachment` is removed; leaving it
///   in place makes hardware key registration fail.
/// - `challenge`, `user.id`, and every `excludeCredentials[].id` are decoded
///   from base64url into bytes.
///
/// # Errors
/// Returns an error if a required field is missing or not valid base64url.
pub fn prepare(challenge: &Value) -> Result<CreationOptions> {
    let mut public_key = challenge.get("publicKey").unwrap_or(challenge).clone();

    if let Some(selection) = public_key
        .get_mut("authenticatorSelection")
        .and_then(Value::as_object_mut)
    {
        selection.remove("authenticatorAttachment");
    }

    let challenge_bytes = decode_field(&public_key, "challenge")?;

    let user_id = public_key
        .get("user")
        .map(|user| decode_field(user, "id"))
        .transpose()?
        .ok_or_else(|| Error::Challenge("missing user.id".to_string()))?;

    let exclude_credential_ids = public_key
        .get("excludeCredentials")
        .and_then(Value::as_array)
        .map(|credentials| {
            credentials
                .iter()
                .map(|credential| decode_field(credential, "id"))
                .collect::<Result<Vec<_>>>()
        })
        .transpose()?
        .unwrap_or_default();

    Ok(CreationOptions {
        challenge: challenge_bytes,
        user_id,
        exclude_credential_ids,
        public_key,
    })
}

/// Build the body for the registration finish endpoint.
#[must_use]
pub fn finish_payload(registration_id: Uuid, credential: &CreatedCredential) -> Value {
    json!({
        "registrationId": registration_id,
        "credential": {
            "id": credential.id,
            "rawId": encoding::encode(&credential.raw_id),
            "response": {
                "clientDataJSON": encoding::encode(&credential.client_data_json),
                "attestationObject": encoding::encode(&credential.attestation_object),
            },
            "type": "public-key",
        },
    })
}

pub(super) fn decode_field(value: &Value, field: &str) -> Result<Vec<u8>> {
    let encoded = value
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| Error::Challenge(format!("missing {field}")))?;

    encoding::decode(encoded)
}
