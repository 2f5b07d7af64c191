//! Crate-wide error type.

use thiserror::Error;

/// All the ways an operation in this crate can fail.
#[derive(Error, Debug)]
pub enum Error {
    /// The environment is missing or malformed. Carries one line per
    /// offending variable so startup can report all of them at once.
    #[error("Environment failed to load:\n{}", .0.join("\n"))]
    Config(Vec<String>),

    /// Transport-level HTTP failure (connection, TLS, body decoding).
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A Spotify endpoint answered with a non-success status.
    #[error("spotify api error: status {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The Telegram Bot API reported `ok: false` or an unusable payload.
    #[error("telegram api error: {0}")]
    Telegram(String),

    /// The OAuth code rendezvous closed before a code arrived.
    #[error("authorization code channel closed before a code arrived")]
    HandoffClosed,

    /// Anything that does not fit the variants above.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Builds an [`Error::Api`] from a response, consuming its body.
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Error::Api { status, body }
    }
}
