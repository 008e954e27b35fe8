//! Marshalling for the passkey authentication leg.

use super::encoding;
use super::registration::decode_field;
use crate::error::{Error, Result};
use serde_json::{json, Value};
use uuid::Uuid;

/// Authentication options prepared for a credential authenticator.
#[derive(Debug, Clone)]
pub struct AssertionOptions {
    pub challenge: Vec<u8>,
    pub rp_id: Option<String>,
    pub allow_credential_ids: Vec<Vec<u8>>,
    pub public_key: Value,
}

/// An assertion produced by an authenticator for an existing credential.
#[derive(Debug, Clone)]
pub struct AssertionCredential {
    pub id: String,
    pub raw_id: Vec<u8>,
    pub authenticator_data: Vec<u8>,
    pub client_data_json: Vec<u8>,
    pub signature: Vec<u8>,
    pub user_handle: Option<Vec<u8>>,
}

/// Prepare the server's authentication challenge for an authenticator.
///
/// Rewrites applied to `publicKey`:
/// - `userVerification` is removed; the server pins a policy some platform
///   authenticators refuse to satisfy.
/// - `challenge` and every `allowCredentials[].id` are decoded from
///   base64url into bytes.
///
/// # Errors
/// Returns an error if a required field is missing or not valid base64url.
pub fn prepare(challenge: &Value) -> Result<AssertionOptions> {
    let mut public_key = challenge.get("publicKey").unwrap_or(challenge).clone();

    if let Some(options) = public_key.as_object_mut() {
        options.remove("userVerification");
    } else {
        return Err(Error::Challenge("publicKey is not an object".to_string()));
    }

    let challenge_bytes = decode_field(&public_key, "challenge")?;

    let rp_id = public_key
        .get("rpId")
        .and_then(Value::as_str)
        .map(ToString::to_string);

    let allow_credential_ids = public_key
        .get("allowCredentials")
        .and_then(Value::as_array)
        .map(|credentials| {
            credentials
                .iter()
                .map(|credential| decode_field(credential, "id"))
                .collect::<Result<Vec<_>>>()
        })
        .transpose()?
        .unwrap_or_default();

    Ok(AssertionOptions {
        challenge: challenge_bytes,
        rp_id,
        allow_credential_ids,
        public_key,
    })
}

/// Build the body for the authentication finish endpoint. A discoverable
/// credential may not return a user handle; the field is `null` then.
#[must_use]
pub fn finish_payload(authentication_id: Uuid, credential: &AssertionCredential) -> Value {
    json!({
        "authenticationId": authentication_id,
        "credential": {
            "id": credential.id,
            "rawId": encoding::encode(&credential.raw_id),
            "response": {
                "authenticatorData": encoding::encode(&credential.authenticator_data),
                "clientDataJSON": encoding::encode(&credential.client_data_json),
                "signature": encoding::encode(&credential.signature),
                "userHandle": credential.user_handle.as_deref().map(encoding::encode),
            },
            "type": "public-key",
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    fn server_challenge() -> Value {
        json!({
            "publicKey": {
                "challenge": "AQIDBA",
                "timeout": 60000,
                "rpId": "id.example.com",
                "allowCredentials": [
                    {"id": "BQYHCA", "type": "public-key"}
                ],
                "userVerification": "required"
            }
        })
    }

    #[test]
    fn decodes_and_strips_user_verification() -> Result<()> {
        let options = prepare(&server_challenge())?;
        assert_eq!(options.challenge, vec![1, 2, 3, 4]);
        assert_eq!(options.rp_id.as_deref(), Some("id.example.com"));
        assert_eq!(options.allow_credential_ids, vec![vec![5, 6, 7, 8]]);
        assert!(options.public_key.get("userVerification").is_none());
        Ok(())
    }

    #[test]
    fn discoverable_flow_has_no_allow_list() -> Result<()> {
        let options = prepare(&json!({"publicKey": {"challenge": "AQIDBA"}}))?;
        assert!(options.allow_credential_ids.is_empty());
        Ok(())
    }

    #[test]
    fn finish_payload_handles_missing_user_handle() {
        let credential = AssertionCredential {
            id: "BQYHCA".to_string(),
            raw_id: vec![5, 6, 7, 8],
            authenticator_data: vec![1],
            client_data_json: b"{\"type\":\"webauthn.get\"}".to_vec(),
            signature: vec![9, 9],
            user_handle: None,
        };
        let payload = finish_payload(Uuid::nil(), &credential);
        assert_eq!(payload["credential"]["response"]["userHandle"], json!(null));
        assert_eq!(payload["credential"]["rawId"], json!("BQYHCA"));
    }

    #[test]
    fn finish_payload_encodes_user_handle() {
        let credential = AssertionCredential {
            id: "BQYHCA".to_string(),
            raw_id: vec![5, 6, 7, 8],
            authenticator_data: vec![1],
            client_data_json: Vec::new(),
            signature: Vec::new(),
            user_handle: Some(b"abcd".to_vec()),
        };
        let payload = finish_payload(Uuid::nil(), &credential);
        assert_eq!(
            payload["credential"]["response"]["userHandle"],
            json!("YWJjZA")
        );
    }
}
