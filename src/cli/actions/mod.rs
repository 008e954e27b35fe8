pub mod apps;
pub mod audit;
pub mod auth;
pub mod connections;
pub mod passkeys;
pub mod roles;
pub mod settings;
pub mod tokens;
pub mod users;
pub mod version;

// Internal "interpreter" for `Action`.
// We keep the match in a separate module so `mod.rs` stays small as more
// actions are added.
mod run;

use crate::api::Client;
use crate::cli::globals::GlobalArgs;
use crate::session::SessionStore;
use anyhow::{bail, Context, Result};
use secrecy::SecretString;
use uuid::Uuid;

#[derive(Debug)]
pub enum Action {
    Health { quiet: bool },
    Login { email: String, password: SecretString },
    Mfa { flow_id: Uuid, code: String },
    Logout,
    Whoami,
    Register(auth::RegisterArgs),
    Users(users::UsersAction),
    Roles(roles::RolesAction),
    Apps(apps::AppsAction),
    Tokens(tokens::TokensAction),
    Connections(connections::ConnectionsAction),
    Audit(audit::AuditAction),
    Settings(settings::SettingsAction),
    Passkeys(passkeys::PasskeysAction),
    Version { check: bool },
}

impl Action {
    // Convenience wrapper so call sites can do `action.execute(&globals).await`.
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self, globals: &GlobalArgs) -> Result<()> {
        run::execute(self, globals).await
    }
}

/// Client with the stored session attached and proven against the API.
/// Commands that need a session fail fast here when none exists.
pub(crate) async fn authed_client(globals: &GlobalArgs) -> Result<Client> {
    let store = SessionStore::new(&globals.session_file);
    let mut client = Client::new(&globals.api_url)?;

    match store.resume(&mut client).await? {
        Some(_) => Ok(client),
        None => bail!("not logged in, run `authctl login` first"),
    }
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("failed to render response")?
    );
    Ok(())
}
