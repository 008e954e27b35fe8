use super::{authed_client, print_json};
use crate::api::Client;
use crate::cli::globals::GlobalArgs;
use crate::models::SettingsUpdates;
use anyhow::Result;

#[derive(Debug)]
pub enum SettingsAction {
    Get,
    Set {
        allow_registration: bool,
        allow_oauth_apps_for_users: bool,
    },
}

pub async fn handle(action: SettingsAction, globals: &GlobalArgs) -> Result<()> {
    match action {
        SettingsAction::Get => {
            // Settings are public; no session needed.
            let client = Client::new(&globals.api_url)?;
            print_json(&client.get_settings().await?)
        }
        SettingsAction::Set {
            allow_registration,
            allow_oauth_apps_for_users,
        } => {
            let client = authed_client(globals).await?;
            let updates = SettingsUpdates {
                allow_registration,
                allow_oauth_apps_for_users,
            };
            print_json(&client.update_settings(&updates).await?)
        }
    }
}
