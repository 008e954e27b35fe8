//! Session commands: health, login, mfa, logout, whoami, register.

use super::{authed_client, print_json};
use crate::api::Client;
use crate::cli::globals::GlobalArgs;
use crate::models::UserRegistration;
use crate::session::SessionStore;
use anyhow::{bail, Context, Result};
use secrecy::SecretString;
use uuid::Uuid;

#[derive(Debug)]
pub struct RegisterArgs {
    pub email: String,
    pub password: SecretString,
    pub first_name: String,
    pub last_name: String,
    pub code: Option<String>,
}

pub async fn health(globals: &GlobalArgs, quiet: bool) -> Result<()> {
    let client = Client::new(&globals.api_url)?;
    let online = client.online().await.unwrap_or(false);

    if !quiet {
        println!("{}", if online { "online" } else { "offline" });
    }

    if online {
        Ok(())
    } else {
        bail!("{} is not reachable", globals.api_url)
    }
}

pub async fn login(globals: &GlobalArgs, email: &str, password: &SecretString) -> Result<()> {
    let mut client = Client::new(&globals.api_url)?;
    let response = client.login(email, password).await?;

    if response.mfa_required {
        let flow_id = response
            .mfa_flow_id
            .context("MFA required but the API returned no flow id")?;
        println!("MFA required. Finish with: authctl mfa <code> --flow-id {flow_id}");
        return Ok(());
    }

    let token = client.token().context("login succeeded without a token")?;
    SessionStore::new(&globals.session_file).save(token)?;

    match response.user {
        Some(user) => println!("Logged in as {} ({})", user.display_name(), user.email),
        None => println!("Logged in"),
    }

    Ok(())
}

pub async fn mfa(globals: &GlobalArgs, flow_id: Uuid, code: &str) -> Result<()> {
    let mut client = Client::new(&globals.api_url)?;
    client.resume_mfa_flow(flow_id);

    let response = client.mfa_verify(code).await?;

    let token = client
        .token()
        .context("MFA verification succeeded without a token")?;
    SessionStore::new(&globals.session_file).save(token)?;

    match response.user {
        Some(user) => println!("Logged in as {} ({})", user.display_name(), user.email),
        None => println!("Logged in"),
    }

    Ok(())
}

pub fn logout(globals: &GlobalArgs) -> Result<()> {
    SessionStore::new(&globals.session_file).clear()?;
    println!("Logged out");
    Ok(())
}

pub async fn whoami(globals: &GlobalArgs) -> Result<()> {
    let client = authed_client(globals).await?;
    let user = client.current_user().await?;
    print_json(&user)
}

pub async fn register(globals: &GlobalArgs, args: RegisterArgs) -> Result<()> {
    use secrecy::ExposeSecret;

    let client = Client::new(&globals.api_url)?;
    let registration = UserRegistration::new(
        &args.email,
        args.password.expose_secret(),
        &args.first_name,
        &args.last_name,
        args.code.as_deref(),
    );

    let user = client.create_user(&registration).await?;
    print_json(&user)
}
