use crate::cli::actions::{
    apps::AppsAction, audit::AuditAction, auth::RegisterArgs, connections::ConnectionsAction,
    passkeys::PasskeysAction, roles::RolesAction, settings::SettingsAction, tokens::TokensAction,
    users::UsersAction, Action,
};
use crate::models::{OAuthApplicationUpdates, RegistrationTokenUpdates, UserUpdates};
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use secrecy::SecretString;
use uuid::Uuid;

/// Map parsed arguments onto an [`Action`].
///
/// # Errors
/// Returns an error for malformed ids or missing required arguments.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some(("health", sub)) => Ok(Action::Health {
            quiet: sub.get_flag("quiet"),
        }),
        Some(("login", sub)) => Ok(Action::Login {
            email: required(sub, "email")?,
            password: SecretString::from(required(sub, "password")?),
        }),
        Some(("mfa", sub)) => Ok(Action::Mfa {
            flow_id: required_uuid(sub, "flow-id")?,
            code: required(sub, "code")?,
        }),
        Some(("logout", _)) => Ok(Action::Logout),
        Some(("whoami", _)) => Ok(Action::Whoami),
        Some(("register", sub)) => Ok(Action::Register(RegisterArgs {
            email: required(sub, "email")?,
            password: SecretString::from(required(sub, "password")?),
            first_name: required(sub, "first-name")?,
            last_name: required(sub, "last-name")?,
            code: optional(sub, "code"),
        })),
        Some(("users", sub)) => users(sub),
        Some(("roles", sub)) => roles(sub),
        Some(("apps", sub)) => apps(sub),
        Some(("tokens", sub)) => tokens(sub),
        Some(("connections", sub)) => connections(sub),
        Some(("audit", sub)) => audit(sub),
        Some(("settings", sub)) => settings(sub),
        Some(("passkeys", sub)) => passkeys(sub),
        Some(("version", sub)) => Ok(Action::Version {
            check: sub.get_flag("check"),
        }),
        _ => Err(anyhow!("unknown command")),
    }
}

fn users(matches: &ArgMatches) -> Result<Action> {
    let action = match matches.subcommand() {
        Some(("list", _)) => UsersAction::List,
        Some(("update", sub)) => UsersAction::Update {
            id: required_uuid(sub, "id")?,
            updates: UserUpdates {
                email: optional(sub, "email"),
                password: optional(sub, "password"),
                first_name: optional(sub, "first-name"),
                last_name: optional(sub, "last-name"),
                roles: optional_uuids(sub, "role")?,
                disabled: sub.get_one::<bool>("disabled").copied(),
            },
        },
        Some(("delete", sub)) => UsersAction::Delete {
            id: required_uuid(sub, "id")?,
        },
        Some(("enable-totp", sub)) => UsersAction::EnableTotp {
            id: required_uuid(sub, "id")?,
            password: SecretString::from(required(sub, "password")?),
        },
        Some(("disable-totp", sub)) => UsersAction::DisableTotp {
            id: required_uuid(sub, "id")?,
            code: optional(sub, "code"),
            password: optional(sub, "password").map(SecretString::from),
        },
        _ => return Err(anyhow!("unknown users command")),
    };

    Ok(Action::Users(action))
}

fn roles(matches: &ArgMatches) -> Result<Action> {
    let action = match matches.subcommand() {
        Some(("create", sub)) => RolesAction::Create {
            name: required(sub, "name")?,
        },
        Some(("list", _)) => RolesAction::List,
        Some(("get", sub)) => RolesAction::Get {
            id: required_uuid(sub, "id")?,
        },
        Some(("update", sub)) => RolesAction::Update {
            id: required_uuid(sub, "id")?,
            name: required(sub, "name")?,
        },
        Some(("delete", sub)) => RolesAction::Delete {
            id: required_uuid(sub, "id")?,
        },
        _ => return Err(anyhow!("unknown roles command")),
    };

    Ok(Action::Roles(action))
}

fn apps(matches: &ArgMatches) -> Result<Action> {
    let action = match matches.subcommand() {
        Some(("create", sub)) => AppsAction::Create {
            name: required(sub, "name")?,
            description: optional(sub, "description"),
            redirect_uris: strings(sub, "redirect-uri"),
        },
        Some(("list", _)) => AppsAction::List,
        Some(("get", sub)) => AppsAction::Get {
            id: required_uuid(sub, "id")?,
        },
        Some(("update", sub)) => AppsAction::Update {
            id: required_uuid(sub, "id")?,
            updates: OAuthApplicationUpdates {
                name: optional(sub, "name"),
                description: optional(sub, "description"),
                redirect_uris: optional_strings(sub, "redirect-uri"),
            },
        },
        Some(("delete", sub)) => AppsAction::Delete {
            id: required_uuid(sub, "id")?,
        },
        Some(("authorize", sub)) => AppsAction::Authorize {
            client_id: required_uuid(sub, "client-id")?,
            redirect_uri: required(sub, "redirect-uri")?,
            scope: strings(sub, "scope"),
        },
        _ => return Err(anyhow!("unknown apps command")),
    };

    Ok(Action::Apps(action))
}

fn tokens(matches: &ArgMatches) -> Result<Action> {
    let action = match matches.subcommand() {
        Some(("create", sub)) => TokensAction::Create {
            max_uses: sub.get_one::<u32>("max-uses").copied().unwrap_or(1),
            expires_in: sub.get_one::<u64>("expires-in").copied(),
        },
        Some(("list", _)) => TokensAction::List,
        Some(("get", sub)) => TokensAction::Get {
            id: required_uuid(sub, "id")?,
        },
        Some(("update", sub)) => TokensAction::Update {
            id: required_uuid(sub, "id")?,
            updates: RegistrationTokenUpdates {
                max_uses: sub.get_one::<u32>("max-uses").copied(),
                expires_in: sub.get_one::<u64>("expires-in").copied(),
                auto_roles: optional_uuids(sub, "auto-role")?,
            },
        },
        Some(("delete", sub)) => TokensAction::Delete {
            id: required_uuid(sub, "id")?,
        },
        _ => return Err(anyhow!("unknown tokens command")),
    };

    Ok(Action::Tokens(action))
}

fn connections(matches: &ArgMatches) -> Result<Action> {
    let action = match matches.subcommand() {
        Some(("list", sub)) => ConnectionsAction::List {
            user: optional_uuid(sub, "user")?,
        },
        Some(("disconnect", sub)) => ConnectionsAction::Disconnect {
            application_id: required_uuid(sub, "application-id")?,
        },
        _ => return Err(anyhow!("unknown connections command")),
    };

    Ok(Action::Connections(action))
}

fn audit(matches: &ArgMatches) -> Result<Action> {
    let action = match matches.subcommand() {
        Some(("list", sub)) => AuditAction::List {
            user: optional_uuid(sub, "user")?,
            human: sub.get_flag("human"),
        },
        _ => return Err(anyhow!("unknown audit command")),
    };

    Ok(Action::Audit(action))
}

fn settings(matches: &ArgMatches) -> Result<Action> {
    let action = match matches.subcommand() {
        Some(("get", _)) => SettingsAction::Get,
        Some(("set", sub)) => SettingsAction::Set {
            allow_registration: sub
                .get_one::<bool>("allow-registration")
                .copied()
                .context("missing required argument: --allow-registration")?,
            allow_oauth_apps_for_users: sub
                .get_one::<bool>("allow-oauth-apps")
                .copied()
                .context("missing required argument: --allow-oauth-apps")?,
        },
        _ => return Err(anyhow!("unknown settings command")),
    };

    Ok(Action::Settings(action))
}

fn passkeys(matches: &ArgMatches) -> Result<Action> {
    let action = match matches.subcommand() {
        Some(("list", sub)) => PasskeysAction::List {
            user: optional_uuid(sub, "user")?,
        },
        Some(("update", sub)) => PasskeysAction::Update {
            id: required_uuid(sub, "id")?,
            name: required(sub, "name")?,
        },
        Some(("delete", sub)) => PasskeysAction::Delete {
            id: required_uuid(sub, "id")?,
        },
        _ => return Err(anyhow!("unknown passkeys command")),
    };

    Ok(Action::Passkeys(action))
}

fn required(matches: &ArgMatches, name: &str) -> Result<String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .with_context(|| format!("missing required argument: --{name}"))
}

fn optional(matches: &ArgMatches, name: &str) -> Option<String> {
    matches.get_one::<String>(name).cloned()
}

fn required_uuid(matches: &ArgMatches, name: &str) -> Result<Uuid> {
    parse_uuid(&required(matches, name)?)
}

fn optional_uuid(matches: &ArgMatches, name: &str) -> Result<Option<Uuid>> {
    optional(matches, name)
        .map(|value| parse_uuid(&value))
        .transpose()
}

fn strings(matches: &ArgMatches, name: &str) -> Vec<String> {
    matches
        .get_many::<String>(name)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn optional_strings(matches: &ArgMatches, name: &str) -> Option<Vec<String>> {
    let values = strings(matches, name);
    (!values.is_empty()).then_some(values)
}

fn optional_uuids(matches: &ArgMatches, name: &str) -> Result<Option<Vec<Uuid>>> {
    optional_strings(matches, name)
        .map(|values| values.iter().map(|value| parse_uuid(value)).collect())
        .transpose()
}

fn parse_uuid(value: &str) -> Result<Uuid> {
    Uuid::parse_str(value).with_context(|| format!("invalid id: {value}"))
}
