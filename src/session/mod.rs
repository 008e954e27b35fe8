//! Persistence for the single session token the client keeps.
//!
//! One token, one file. The file lives under the user's config directory by
//! default and is written with owner-only permissions. `resume` is the
//! page-load equivalent: attach the stored token to a client and prove it
//! still works by fetching the current user.

use crate::api::Client;
use crate::error::{Error, Result};
use crate::models::User;
use secrecy::{ExposeSecret, SecretString};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File-backed store for the session token.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `$XDG_CONFIG_HOME/authctl/session`, falling back to
    /// `~/.config/authctl/session`.
    ///
    /// # Errors
    /// Returns an error when neither `XDG_CONFIG_HOME` nor `HOME` is set.
    pub fn default_path() -> Result<PathBuf> {
        if let Ok(config_home) = env::var("XDG_CONFIG_HOME") {
            if !config_home.is_empty() {
                return Ok(PathBuf::from(config_home).join("authctl").join("session"));
            }
        }

        let home = env::var("HOME")
            .map_err(|_| Error::Io(std::io::Error::other("HOME is not set")))?;

        Ok(PathBuf::from(home)
            .join(".config")
            .join("authctl")
            .join("session"))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored token, if any. An empty or unreadable file counts as
    /// no session.
    #[must_use]
    pub fn load(&self) -> Option<SecretString> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();

        if token.is_empty() {
            None
        } else {
            Some(SecretString::from(token.to_string()))
        }
    }

    /// Persist the token with owner-only permissions.
    ///
    /// # Errors
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, token: &SecretString) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, token.expose_secret())?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        debug!("session saved to {}", self.path.display());

        Ok(())
    }

    /// Remove the stored token. Missing files are fine.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Attach the stored token to `client` and validate it by fetching the
    /// current user. Returns `None` when no token is stored, or when the API
    /// rejects the token (the stale token is cleared then). Transport
    /// failures keep the token and bubble up.
    ///
    /// # Errors
    /// Returns an error when the server cannot be reached or the store
    /// cannot be updated.
    pub async fn resume(&self, client: &mut Client) -> Result<Option<User>> {
        let Some(token) = self.load() else {
            return Ok(None);
        };

        client.set_token(Some(token));

        match client.current_user().await {
            Ok(user) => Ok(Some(user)),
            Err(Error::Http { status, .. }) => {
                warn!("stored session rejected ({status}), clearing");
                client.set_token(None);
                self.clear()?;
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn temp_store(name: &str) -> SessionStore {
        let mut path = env::temp_dir();
        path.push(format!("authctl-session-{name}-{}", std::process::id()));
        SessionStore::new(path)
    }

    #[test]
    fn save_load_clear_round_trip() -> Result<()> {
        let store = temp_store("round-trip");
        assert!(store.load().is_none());

        store.save(&SecretString::from("session-token"))?;
        let loaded = store.load().expect("token stored");
        assert_eq!(loaded.expose_secret(), "session-token");

        store.clear()?;
        assert!(store.load().is_none());
        // Clearing twice is not an error.
        store.clear()?;
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn session_file_is_owner_only() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let store = temp_store("permissions");
        store.save(&SecretString::from("session-token"))?;
        let mode = fs::metadata(store.path())?.permissions().mode() & 0o777;
        store.clear()?;
        assert_eq!(mode, 0o600);
        Ok(())
    }

    #[test]
    fn default_path_prefers_xdg_config_home() {
        temp_env::with_vars(
            [
                ("XDG_CONFIG_HOME", Some("/tmp/xdg")),
                ("HOME", Some("/home/ada")),
            ],
            || {
                let path = SessionStore::default_path().expect("path");
                assert_eq!(path, PathBuf::from("/tmp/xdg/authctl/session"));
            },
        );

        temp_env::with_vars(
            [("XDG_CONFIG_HOME", None), ("HOME", Some("/home/ada"))],
            || {
                let path = SessionStore::default_path().expect("path");
                assert_eq!(path, PathBuf::from("/home/ada/.config/authctl/session"));
            },
        );
    }

    #[tokio::test]
    async fn resume_returns_user_for_valid_token() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/@me"))
            .and(header("Authorization", "Bearer session-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 200,
                "message": "OK",
                "data": {
                    "_id": "6a1a9bde-5e10-4b43-9aab-3a2b8e3e3e3e",
                    "email": "admin@example.com",
                    "firstName": "Ada",
                    "lastName": "Lovelace",
                    "roles": [],
                    "mfa": false,
                    "disabled": false,
                    "createdAt": "2024-01-02 03:04:05.000 +00:00:00"
                }
            })))
            .mount(&server)
            .await;

        let store = temp_store("resume-ok");
        store.save(&SecretString::from("session-token"))?;

        let mut client = Client::new(&server.uri())?;
        let user = store.resume(&mut client).await?;
        store.clear()?;

        assert_eq!(user.map(|u| u.email), Some("admin@example.com".to_string()));
        assert!(client.token().is_some());
        Ok(())
    }

    #[tokio::test]
    async fn resume_clears_rejected_token() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/@me"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "status": 401,
                "message": "Unauthorized"
            })))
            .mount(&server)
            .await;

        let store = temp_store("resume-rejected");
        store.save(&SecretString::from("stale-token"))?;

        let mut client = Client::new(&server.uri())?;
        let user = store.resume(&mut client).await?;

        assert!(user.is_none());
        assert!(client.token().is_none());
        assert!(store.load().is_none());
        Ok(())
    }

    #[tokio::test]
    async fn resume_without_stored_token_is_none() -> Result<()> {
        let store = temp_store("resume-empty");
        let mut client = Client::new("http://id.example.com")?;
        assert!(store.resume(&mut client).await?.is_none());
        Ok(())
    }
}
