//! HTTP client for the identity provider's admin API.
//!
//! One [`Client`] per base URL. Every endpoint helper shares the same
//! request construction, timeout, and error handling: success responses are
//! unwrapped from the `{status, message, data}` envelope, failures collapse
//! into [`Error::Http`] with the status code and a sanitized body. There is
//! no retry and no caching; calls are issued one at a time by direct
//! operator action.

pub mod audit_logs;
pub mod auth;
pub mod connections;
pub mod oauth;
pub mod oauth_applications;
pub mod passkeys;
pub mod registration_tokens;
pub mod roles;
pub mod settings;
pub mod users;

use crate::error::{Error, Result};
use crate::models::ApiResponse;
use crate::APP_USER_AGENT;
use reqwest::{Method, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error};
use url::Url;
use uuid::Uuid;

/// Request timeout applied to every call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Maximum number of error body characters carried in an [`Error::Http`].
const MAX_ERROR_CHARS: usize = 200;

/// Client for the admin API, holding the base URL, the bearer token once a
/// session is established, and the id of a pending MFA flow if a login
/// stopped at the second factor.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
    token: Option<SecretString>,
    mfa_flow: Option<Uuid>,
}

impl Client {
    /// Create a client for `base_url`.
    ///
    /// # Errors
    /// Returns an error if the URL does not parse or the HTTP client cannot
    /// be built.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;

        debug!("base URL: {}", base_url);

        let http = reqwest::Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            base_url,
            http,
            token: None,
            mfa_flow: None,
        })
    }

    /// Create a client that starts out with an existing session token.
    ///
    /// # Errors
    /// Returns an error if the URL does not parse or the HTTP client cannot
    /// be built.
    pub fn with_token(base_url: &str, token: SecretString) -> Result<Self> {
        let mut client = Self::new(base_url)?;
        client.token = Some(token);
        Ok(client)
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn set_token(&mut self, token: Option<SecretString>) {
        self.token = token;
    }

    #[must_use]
    pub fn token(&self) -> Option<&SecretString> {
        self.token.as_ref()
    }

    /// Flow id recorded by the most recent login or TOTP-enable call that
    /// required a second factor.
    #[must_use]
    pub fn pending_mfa_flow(&self) -> Option<Uuid> {
        self.mfa_flow
    }

    pub(crate) fn remember_mfa_flow(&mut self, flow: Option<Uuid>) {
        self.mfa_flow = flow;
    }

    /// Resume an MFA flow started by another process, e.g. a login that
    /// printed its flow id before exiting.
    pub fn resume_mfa_flow(&mut self, flow_id: Uuid) {
        self.mfa_flow = Some(flow_id);
    }

    /// Probe the API root. Any success status counts as online.
    ///
    /// # Errors
    /// Returns an error if the server cannot be reached at all.
    pub async fn online(&self) -> Result<bool> {
        let response = self.http.get(self.base_url.clone()).send().await?;
        Ok(response.status().is_success())
    }

    fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.endpoint(path))
    }

    fn authorized(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let token = self.token.as_ref().ok_or(Error::NoToken)?;
        Ok(self
            .request(method, path)
            .bearer_auth(token.expose_secret()))
    }

    /// Like [`Client::authorized`], but tolerates a missing token for the
    /// endpoints that accept both authenticated and anonymous calls.
    fn maybe_authorized(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.request(method, path);
        match self.token.as_ref() {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }

    /// Send a request and unwrap the envelope's `data` payload.
    pub(crate) async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let envelope = self.execute_envelope(builder).await?;
        envelope
            .data
            .ok_or_else(|| Error::Response("success response without data".to_string()))
    }

    /// Send a request for an endpoint whose success payload may be `null`.
    pub(crate) async fn execute_unit(&self, builder: RequestBuilder) -> Result<()> {
        self.execute_envelope::<serde_json::Value>(builder)
            .await
            .map(|_| ())
    }

    async fn execute_envelope<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<ApiResponse<T>> {
        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(self.error_from(status, response).await);
        }

        Ok(response.json::<ApiResponse<T>>().await?)
    }

    /// Send a request and parse the raw body, for the few endpoints that do
    /// not use the envelope.
    pub(crate) async fn execute_raw<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(self.error_from(status, response).await);
        }

        Ok(response.json::<T>().await?)
    }

    async fn error_from(&self, status: StatusCode, response: reqwest::Response) -> Error {
        let url = response.url().clone();
        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body);

        error!("{} - {}, {}", url, status, message);

        Error::Http {
            status: status.as_u16(),
            message,
        }
    }

    pub(crate) fn get(&self, path: &str) -> Result<RequestBuilder> {
        self.authorized(Method::GET, path)
    }

    pub(crate) fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<RequestBuilder> {
        Ok(self.authorized(Method::POST, path)?.json(body))
    }

    pub(crate) fn patch<B: Serialize>(&self, path: &str, body: &B) -> Result<RequestBuilder> {
        Ok(self.authorized(Method::PATCH, path)?.json(body))
    }

    pub(crate) fn delete(&self, path: &str) -> Result<RequestBuilder> {
        self.authorized(Method::DELETE, path)
    }

    pub(crate) fn get_public(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub(crate) fn post_public<B: Serialize>(&self, path: &str, body: &B) -> RequestBuilder {
        self.request(Method::POST, path).json(body)
    }

    pub(crate) fn post_maybe_authorized<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> RequestBuilder {
        self.maybe_authorized(Method::POST, path).json(body)
    }
}

/// Extract the envelope `message` from an error body, falling back to the
/// trimmed and truncated raw text.
fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(serde_json::Value::as_str) {
            return message.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "request failed".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
