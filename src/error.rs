use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all client operations.
///
/// Remote failures collapse into [`Error::Http`]: the API reports problems
/// uniformly through status codes and a message body, so the client carries
/// exactly that and nothing more.
#[derive(Debug, Error)]
pub enum Error {
    /// The API answered with a non-success status.
    #[error("({status}): {message}")]
    Http { status: u16, message: String },

    /// An operation that needs a session token was called without one.
    #[error("not logged in: no session token set")]
    NoToken,

    /// `mfa_verify` was called without a pending MFA flow id.
    #[error("no pending MFA flow")]
    NoMfaFlow,

    /// A success response was missing its `data` payload.
    #[error("malformed response: {0}")]
    Response(String),

    /// A challenge payload was missing or had a malformed field.
    #[error("malformed challenge: {0}")]
    Challenge(String),

    /// A base64url field could not be decoded.
    #[error("invalid base64url data: {0}")]
    Encoding(String),

    /// The credential authenticator refused or failed the operation.
    #[error("authenticator: {0}")]
    Authenticator(String),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("session store: {0}")]
    Io(#[from] std::io::Error),
}
