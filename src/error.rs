use thiserror::Error;

/// Why a user id lookup produced no id.
///
/// The binary prints the same sentinel for every variant; the distinction
/// only shows up in debug logs and in library callers.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("credentials cannot be encoded as a header value")]
    Credentials(#[from] reqwest::header::InvalidHeaderValue),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("response body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("response has no `id` field")]
    MissingId,

    #[error("`id` field is not an integer")]
    NonIntegerId,
}
