use crate::version::{latest_tag, update_available};
use crate::GIT_COMMIT_HASH;
use anyhow::Result;

pub async fn handle(check: bool) -> Result<()> {
    let current = env!("CARGO_PKG_VERSION");
    println!("authctl {current} ({GIT_COMMIT_HASH})");

    if !check {
        return Ok(());
    }

    match latest_tag().await? {
        Some(latest) if update_available(current, &latest) => {
            println!("update available: {latest}");
        }
        Some(latest) => println!("up to date (latest release: {latest})"),
        None => println!("no releases published yet"),
    }

    Ok(())
}
