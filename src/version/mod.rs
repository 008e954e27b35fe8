//! Release check against the project's published tags.
//!
//! Fetches the tag list from the GitHub API, parses `v<major>.<minor>.<patch>`
//! names, and compares against the running build. A `dev` build never
//! reports an update. One request, no retry.

use crate::error::{Error, Result};
use crate::APP_USER_AGENT;
use regex::Regex;
use serde::Deserialize;
use std::cmp::Ordering;
use std::time::Duration;
use tracing::debug;

/// Repository whose tags are checked.
pub const RELEASE_REPO: &str = "authctl/authctl";
const GITHUB_API: &str = "https://api.github.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct Tag {
    name: String,
}

/// A parsed semantic version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Parse `1.2.3` or `v1.2.3`. Anything else is `None`.
#[must_use]
pub fn parse(version: &str) -> Option<Version> {
    let pattern = Regex::new(r"^v?(\d+)\.(\d+)\.(\d+)$").ok()?;
    let captures = pattern.captures(version.trim())?;

    Some(Version {
        major: captures[1].parse().ok()?,
        minor: captures[2].parse().ok()?,
        patch: captures[3].parse().ok()?,
    })
}

/// Whether `latest` is a newer release than `current`. Unparseable versions
/// and `dev` builds never report an update.
#[must_use]
pub fn update_available(current: &str, latest: &str) -> bool {
    if current == "dev" {
        return false;
    }

    match (parse(current), parse(latest)) {
        (Some(current), Some(latest)) => latest > current,
        _ => false,
    }
}

/// Fetch the most recent tag name from `api_base` (the GitHub API root).
///
/// # Errors
/// Returns an error if the request fails or the tag list does not parse.
pub async fn latest_tag_from(api_base: &str, repo: &str) -> Result<Option<String>> {
    let url = format!("{}/repos/{repo}/tags", api_base.trim_end_matches('/'));

    debug!("checking releases at {url}");

    let client = reqwest::Client::builder()
        .user_agent(APP_USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let response = client.get(&url).send().await?;
    let status = response.status();

    if !status.is_success() {
        return Err(Error::Http {
            status: status.as_u16(),
            message: format!("failed to fetch tags from {url}"),
        });
    }

    let tags: Vec<Tag> = response.json().await?;

    // Tags come newest first.
    Ok(tags.into_iter().next().map(|tag| tag.name))
}

/// Fetch the most recent release tag of this project.
///
/// # Errors
/// Returns an error if the request fails or the tag list does not parse.
pub async fn latest_tag() -> Result<Option<String>> {
    latest_tag_from(GITHUB_API, RELEASE_REPO).await
}
