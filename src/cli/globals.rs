use std::path::PathBuf;

/// Settings shared by every command: where the API lives, where the session
/// token is stored, and which origin registration links point at.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub api_url: String,
    pub session_file: PathBuf,
    pub portal_url: Option<String>,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_url: String, session_file: PathBuf) -> Self {
        Self {
            api_url,
            session_file,
            portal_url: None,
        }
    }

    /// Origin used for shareable links; the API base URL when no portal is
    /// configured.
    #[must_use]
    pub fn link_origin(&self) -> &str {
        self.portal_url.as_deref().unwrap_or(&self.api_url)
    }
}
