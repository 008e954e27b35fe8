use super::{authed_client, print_json};
use crate::cli::globals::GlobalArgs;
use anyhow::Result;
use uuid::Uuid;

#[derive(Debug)]
pub enum AuditAction {
    List { user: Option<Uuid>, human: bool },
}

pub async fn handle(action: AuditAction, globals: &GlobalArgs) -> Result<()> {
    let client = authed_client(globals).await?;

    match action {
        AuditAction::List { user, human } => {
            let logs = client.audit_logs(user).await?;

            if !human {
                return print_json(&logs);
            }

            for log in &logs {
                println!(
                    "{}  {:?} {:?} {}  by {}  {}",
                    log.created_at.full_string(),
                    log.action,
                    log.entity_type,
                    log.entity_id,
                    log.author_id,
                    log.reason,
                );
            }

            Ok(())
        }
    }
}
