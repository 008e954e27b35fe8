use super::{apps, audit, auth, connections, passkeys, roles, settings, tokens, users, version};
use super::Action;
use crate::cli::globals::GlobalArgs;
use anyhow::Result;

pub(super) async fn execute(action: Action, globals: &GlobalArgs) -> Result<()> {
    match action {
        Action::Health { quiet } => auth::health(globals, quiet).await,
        Action::Login { email, password } => auth::login(globals, &email, &password).await,
        Action::Mfa { flow_id, code } => auth::mfa(globals, flow_id, &code).await,
        Action::Logout => auth::logout(globals),
        Action::Whoami => auth::whoami(globals).await,
        Action::Register(args) => auth::register(globals, args).await,
        Action::Users(action) => users::handle(action, globals).await,
        Action::Roles(action) => roles::handle(action, globals).await,
        Action::Apps(action) => apps::handle(action, globals).await,
        Action::Tokens(action) => tokens::handle(action, globals).await,
        Action::Connections(action) => connections::handle(action, globals).await,
        Action::Audit(action) => audit::handle(action, globals).await,
        Action::Settings(action) => settings::handle(action, globals).await,
        Action::Passkeys(action) => passkeys::handle(action, globals).await,
        Action::Version { check } => version::handle(check).await,
    }
}
