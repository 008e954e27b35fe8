use super::{authed_client, print_json};
use crate::cli::globals::GlobalArgs;
use crate::models::UserUpdates;
use anyhow::Result;
use secrecy::SecretString;
use uuid::Uuid;

#[derive(Debug)]
pub enum UsersAction {
    List,
    Update { id: Uuid, updates: UserUpdates },
    Delete { id: Uuid },
    EnableTotp { id: Uuid, password: SecretString },
    DisableTotp {
        id: Uuid,
        code: Option<String>,
        password: Option<SecretString>,
    },
}

pub async fn handle(action: UsersAction, globals: &GlobalArgs) -> Result<()> {
    match action {
        UsersAction::List => {
            let client = authed_client(globals).await?;
            print_json(&client.all_users().await?)
        }
        UsersAction::Update { id, updates } => {
            let client = authed_client(globals).await?;
            print_json(&client.update_user(id, &updates).await?)
        }
        UsersAction::Delete { id } => {
            let client = authed_client(globals).await?;
            print_json(&client.delete_user(id).await?)
        }
        UsersAction::EnableTotp { id, password } => {
            let mut client = authed_client(globals).await?;
            let response = client.enable_totp(id, &password).await?;

            if let Some(flow_id) = client.pending_mfa_flow() {
                println!(
                    "Scan the provisioned secret, then confirm with: authctl mfa <code> --flow-id {flow_id}"
                );
            }

            print_json(&response)
        }
        UsersAction::DisableTotp { id, code, password } => {
            let client = authed_client(globals).await?;
            let user = client
                .disable_totp(id, code.as_deref(), password.as_ref())
                .await?;
            print_json(&user)
        }
    }
}
