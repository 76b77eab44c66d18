// API client module: a small blocking HTTP client that asks the user
// endpoint which account a pair of credentials belongs to. One call, one
// answer, no retries.

use std::fmt;
use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde_json::{Number, Value};
use tracing::debug;

use crate::error::LookupError;

/// Base URL used when `GITHUB_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "GITHUB_API_URL";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Account name and secret token sent as HTTP Basic credentials.
///
/// Neither field is persisted. `Debug` redacts the token.
#[derive(Clone)]
pub struct Credentials {
    account_name: String,
    secret_token: String,
}

impl Credentials {
    pub fn new(account_name: impl Into<String>, secret_token: impl Into<String>) -> Self {
        Credentials {
            account_name: account_name.into(),
            secret_token: secret_token.into(),
        }
    }

    /// `Basic base64(account_name:secret_token)`, the value of the
    /// Authorization header.
    fn basic_auth_value(&self) -> String {
        let raw = format!("{}:{}", self.account_name, self.secret_token);
        format!("Basic {}", STANDARD.encode(raw))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_name", &self.account_name)
            .field("secret_token", &"<redacted>")
            .finish()
    }
}

/// Numeric account id taken from the `id` field of the user response.
///
/// Always a JSON integer, signed or unsigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId(Number);

impl UserId {
    fn from_value(value: &Value) -> Result<Self, LookupError> {
        match value.get("id") {
            None => Err(LookupError::MissingId),
            Some(Value::Number(n)) if n.is_i64() || n.is_u64() => Ok(UserId(n.clone())),
            Some(_) => Err(LookupError::NonIntegerId),
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.0.as_u64()
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.0.as_i64()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Blocking client bound to one API base URL.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url`. No request timeout is set, so a
    /// lookup against an unresponsive endpoint blocks until the peer gives
    /// up.
    pub fn new(base_url: impl Into<String>) -> Result<Self, LookupError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<Duration>)
            .build()
            .map_err(LookupError::ClientBuild)?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(ApiClient { client, base_url })
    }

    /// Create a client configured from `GITHUB_API_URL`, falling back to
    /// the public API.
    pub fn from_env() -> Result<Self, LookupError> {
        let base_url = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Self::new(base_url)
    }

    pub fn user_url(&self) -> String {
        format!("{}/user", self.base_url)
    }

    fn auth_headers(&self, credentials: &Credentials) -> Result<HeaderMap, LookupError> {
        let mut auth = HeaderValue::from_str(&credentials.basic_auth_value())?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        Ok(headers)
    }

    /// GET `/user` with Basic auth and return the `id` of the account the
    /// credentials belong to. Issues exactly one request.
    pub fn lookup_id(&self, credentials: &Credentials) -> Result<UserId, LookupError> {
        let url = self.user_url();
        debug!(%url, "requesting authenticated user");

        let res = self
            .client
            .get(&url)
            .headers(self.auth_headers(credentials)?)
            .send()
            .map_err(LookupError::Transport)?;

        let status = res.status();
        if status != StatusCode::OK {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = res.text().map_err(LookupError::Transport)?;
        let value: Value = serde_json::from_str(&body)?;
        UserId::from_value(&value)
    }
}
