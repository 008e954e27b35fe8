use super::{authed_client, print_json};
use crate::cli::globals::GlobalArgs;
use anyhow::Result;
use uuid::Uuid;

#[derive(Debug)]
pub enum ConnectionsAction {
    List { user: Option<Uuid> },
    Disconnect { application_id: Uuid },
}

pub async fn handle(action: ConnectionsAction, globals: &GlobalArgs) -> Result<()> {
    let client = authed_client(globals).await?;

    match action {
        ConnectionsAction::List { user } => {
            let user_id = match user {
                Some(id) => id,
                None => client.current_user().await?.id,
            };
            print_json(&client.user_connections(user_id).await?)
        }
        ConnectionsAction::Disconnect { application_id } => {
            client.disconnect(application_id).await?;
            println!("Disconnected {application_id}");
            Ok(())
        }
    }
}
