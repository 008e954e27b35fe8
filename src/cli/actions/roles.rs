use super::{authed_client, print_json};
use crate::cli::globals::GlobalArgs;
use crate::models::RoleUpdates;
use anyhow::Result;
use uuid::Uuid;

#[derive(Debug)]
pub enum RolesAction {
    Create { name: String },
    List,
    Get { id: Uuid },
    Update { id: Uuid, name: String },
    Delete { id: Uuid },
}

pub async fn handle(action: RolesAction, globals: &GlobalArgs) -> Result<()> {
    let client = authed_client(globals).await?;

    match action {
        RolesAction::Create { name } => print_json(&client.create_role(&name).await?),
        RolesAction::List => print_json(&client.all_roles().await?),
        RolesAction::Get { id } => print_json(&client.get_role(id).await?),
        RolesAction::Update { id, name } => {
            let updates = RoleUpdates { name: Some(name) };
            print_json(&client.update_role(id, &updates).await?)
        }
        RolesAction::Delete { id } => print_json(&client.delete_role(id).await?),
    }
}
