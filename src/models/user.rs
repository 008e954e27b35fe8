use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user account as returned by the API.
///
/// `created_at` is a plain string on the wire; the server stringifies the
/// datetime for this entity only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub roles: Vec<Uuid>,
    #[serde(default)]
    pub mfa: bool,
    pub disabled: bool,
    pub created_at: String,
}

impl User {
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

/// Body for `POST /users`. An empty last name is sent as `null`, and the
/// registration code is only present for self-registration with a token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegistration {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub registration_code: Option<String>,
}

impl UserRegistration {
    #[must_use]
    pub fn new(
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
        registration_code: Option<&str>,
    ) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            first_name: first_name.to_string(),
            last_name: (!last_name.is_empty()).then(|| last_name.to_string()),
            registration_code: registration_code.map(ToString::to_string),
        }
    }
}

/// Partial update body for `PATCH /users/{id}`. Unset fields are omitted.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    #[test]
    fn deserializes_wire_user() -> Result<()> {
        let value = json!({
            "_id": "6a1a9bde-5e10-4b43-9aab-3a2b8e3e3e3e",
            "email": "admin@example.com",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "roles": ["0e2e2ca6-6b4f-4ee4-9b3f-1c6a3c8a7f10"],
            "mfa": true,
            "disabled": false,
            "createdAt": "2024-01-02 03:04:05.000 +00:00:00"
        });
        let user: User = serde_json::from_value(value)?;
        assert_eq!(user.email, "admin@example.com");
        assert!(user.mfa);
        assert_eq!(user.display_name(), "Ada Lovelace");
        Ok(())
    }

    #[test]
    fn registration_nulls_empty_last_name() -> Result<()> {
        let body = UserRegistration::new("a@b.c", "hunter2", "Ada", "", None);
        let value = serde_json::to_value(body)?;
        assert_eq!(value["lastName"], json!(null));
        Ok(())
    }

    #[test]
    fn updates_omit_unset_fields() -> Result<()> {
        let updates = UserUpdates {
            disabled: Some(true),
            ..UserUpdates::default()
        };
        let value = serde_json::to_value(updates)?;
        assert_eq!(value, json!({"disabled": true}));
        Ok(())
    }
}
