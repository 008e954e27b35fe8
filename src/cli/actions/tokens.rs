use super::{authed_client, print_json};
use crate::cli::globals::GlobalArgs;
use crate::models::RegistrationTokenUpdates;
use anyhow::Result;
use uuid::Uuid;

#[derive(Debug)]
pub enum TokensAction {
    Create {
        max_uses: u32,
        expires_in: Option<u64>,
    },
    List,
    Get { id: Uuid },
    Update {
        id: Uuid,
        updates: RegistrationTokenUpdates,
    },
    Delete { id: Uuid },
}

pub async fn handle(action: TokensAction, globals: &GlobalArgs) -> Result<()> {
    let client = authed_client(globals).await?;

    match action {
        TokensAction::Create {
            max_uses,
            expires_in,
        } => {
            let token = client
                .create_registration_token(max_uses, expires_in)
                .await?;
            println!("{}", token.registration_url(globals.link_origin()));
            print_json(&token)
        }
        TokensAction::List => {
            let tokens = client.all_registration_tokens().await?;

            for token in &tokens {
                let expiry = token
                    .expires_at()
                    .map_or_else(|| "never".to_string(), |at| at.full_string());
                println!(
                    "{}  uses {}/{}  expires {}  {}",
                    token.id,
                    token.uses.len(),
                    token.max_uses,
                    expiry,
                    token.registration_url(globals.link_origin()),
                );
            }

            Ok(())
        }
        TokensAction::Get { id } => print_json(&client.get_registration_token(id).await?),
        TokensAction::Update { id, updates } => {
            print_json(&client.update_registration_token(id, &updates).await?)
        }
        TokensAction::Delete { id } => print_json(&client.delete_registration_token(id).await?),
    }
}
