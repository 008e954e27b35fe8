//! OAuth scope catalogue.
//!
//! The provider grants third-party applications a restricted subset of
//! scopes. `DENIED_SCOPES` lists the ones that exist server-side but must
//! never appear in an authorization request from a client.

/// Requestable scopes with their human descriptions.
pub const SCOPES: &[(&str, &str)] = &[
    ("user:read", "Read your profile data"),
    ("user:update", "Change your profile data"),
    ("user:*", "Read and modify your profile"),
    ("roles:read", "Read your roles"),
    ("audit_logs:read", "Read your audit logs"),
    ("oauth_applications:read", "Read your OAuth applications"),
    ("connections:read", "Read your connected OAuth Apps"),
    ("connections:delete", "Disconnect OAuth Apps"),
    ("connections:*", "Read and disconnect your connected OAuth Apps"),
];

/// Scopes that exist but are never grantable to third-party applications.
pub const DENIED_SCOPES: &[&str] = &[
    "user:create",
    "user:delete",
    "roles:create",
    "roles:update",
    "roles:delete",
    "roles:*",
    "audit_logs:create",
    "audit_logs:update",
    "audit_logs:delete",
    "audit_logs:*",
    "oauth_applications:create",
    "oauth_applications:update",
    "oauth_applications:delete",
    "oauth_applications:*",
    "connections:create",
    "connections:update",
];

/// Human description of a requestable scope, if known.
#[must_use]
pub fn describe(scope: &str) -> Option<&'static str> {
    SCOPES
        .iter()
        .find(|(name, _)| *name == scope)
        .map(|(_, description)| *description)
}

/// Returns the entries of `scopes` that are unknown or denied; an empty
/// result means the request is safe to send.
#[must_use]
pub fn invalid_scopes<'a>(scopes: &'a [String]) -> Vec<&'a str> {
    scopes
        .iter()
        .map(String::as_str)
        .filter(|scope| DENIED_SCOPES.contains(scope) || describe(scope).is_none())
        .collect()
}
