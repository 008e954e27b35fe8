use super::{authed_client, print_json};
use crate::cli::globals::GlobalArgs;
use crate::models::{scopes, OAuthApplicationUpdates};
use anyhow::{bail, Result};
use uuid::Uuid;

#[derive(Debug)]
pub enum AppsAction {
    Create {
        name: String,
        description: Option<String>,
        redirect_uris: Vec<String>,
    },
    List,
    Get { id: Uuid },
    Update {
        id: Uuid,
        updates: OAuthApplicationUpdates,
    },
    Delete { id: Uuid },
    Authorize {
        client_id: Uuid,
        redirect_uri: String,
        scope: Vec<String>,
    },
}

pub async fn handle(action: AppsAction, globals: &GlobalArgs) -> Result<()> {
    let client = authed_client(globals).await?;

    match action {
        AppsAction::Create {
            name,
            description,
            redirect_uris,
        } => {
            let app = client
                .create_application(&name, description.as_deref(), &redirect_uris)
                .await?;
            print_json(&app)
        }
        AppsAction::List => print_json(&client.all_applications().await?),
        AppsAction::Get { id } => print_json(&client.get_application(id).await?),
        AppsAction::Update { id, updates } => {
            print_json(&client.update_application(id, &updates).await?)
        }
        AppsAction::Delete { id } => print_json(&client.delete_application(id).await?),
        AppsAction::Authorize {
            client_id,
            redirect_uri,
            scope,
        } => {
            let rejected = scopes::invalid_scopes(&scope);
            if !rejected.is_empty() {
                bail!("invalid scope(s): {}", rejected.join(", "));
            }

            let grant = client.authorize(client_id, &redirect_uri, &scope).await?;
            println!("{}", grant.redirect_url());
            Ok(())
        }
    }
}
