//! Wire types for the identity provider's REST API.
//!
//! Field names follow the remote API (camelCase, ids under `_id`). Most
//! timestamps arrive as Mongo extended-JSON datetimes and are decoded by
//! [`datetime::WireDateTime`]; `User.createdAt` is a plain string because the
//! server stringifies it before storing.

pub mod audit_log;
pub mod connection;
pub mod datetime;
pub mod login;
pub mod oauth_application;
pub mod passkey;
pub mod registration_token;
pub mod response;
pub mod role;
pub mod scopes;
pub mod settings;
pub mod user;

pub use audit_log::{AuditLog, AuditLogAction, AuditLogEntityType};
pub use connection::Connection;
pub use datetime::WireDateTime;
pub use login::LoginResponse;
pub use oauth_application::{OAuthApplication, OAuthApplicationUpdates};
pub use passkey::{Passkey, PasskeyUpdates};
pub use registration_token::{NewRegistrationToken, RegistrationToken, RegistrationTokenUpdates};
pub use response::ApiResponse;
pub use role::{Role, RoleUpdates};
pub use settings::{Settings, SettingsUpdates};
pub use user::{User, UserRegistration, UserUpdates};
