use super::{authed_client, print_json};
use crate::cli::globals::GlobalArgs;
use crate::models::PasskeyUpdates;
use anyhow::Result;
use uuid::Uuid;

#[derive(Debug)]
pub enum PasskeysAction {
    List { user: Option<Uuid> },
    Update { id: Uuid, name: String },
    Delete { id: Uuid },
}

pub async fn handle(action: PasskeysAction, globals: &GlobalArgs) -> Result<()> {
    let client = authed_client(globals).await?;

    match action {
        PasskeysAction::List { user } => match user {
            Some(user_id) => print_json(&client.user_passkeys(user_id).await?),
            None => print_json(&client.all_passkeys().await?),
        },
        PasskeysAction::Update { id, name } => {
            let updates = PasskeyUpdates { name: Some(name) };
            print_json(&client.update_passkey(id, &updates).await?)
        }
        PasskeysAction::Delete { id } => {
            client.delete_passkey(id).await?;
            println!("Deleted passkey {id}");
            Ok(())
        }
    }
}
