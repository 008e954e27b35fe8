//! # authctl
//!
//! Administration client for an identity and OAuth provider.
//!
//! The remote API owns all business logic (password hashing, token issuance,
//! audit trails, access control). This crate is the administrative surface in
//! front of it:
//!
//! - [`api::Client`]: typed calls for users, roles, OAuth applications,
//!   registration tokens, connections, audit logs, and settings, plus the
//!   login/MFA and passkey authentication flows.
//! - [`webauthn`]: marshalling for the two-phase passkey handshake between
//!   the server's base64url JSON and a platform credential authenticator.
//! - [`session`]: persistence for the single session token the client keeps.
//! - [`version`]: release tag lookup to report available updates.
//!
//! The `authctl` binary wires these together behind a clap command tree.

pub mod api;
pub mod cli;
pub mod error;
pub mod models;
pub mod session;
pub mod version;
pub mod webauthn;

pub use error::{Error, Result};

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
