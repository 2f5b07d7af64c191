use std::sync::Arc;

use chrono::Utc;
use reqwest::{Client, StatusCode, Url};
use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::Mutex;

use crate::{
    Res,
    config::Config,
    error::Error,
    info,
    types::{CurrentUser, Token, TokenResponse},
};

/// OAuth scopes the bot asks for. Reading covers the shuffle menu and
/// track gathering, writing covers playlist creation and removal.
const SCOPES: &str =
    "playlist-read-private playlist-modify-private user-library-read user-library-modify";

/// Seconds before nominal expiry at which a token already counts as
/// stale. Keeps long-running shuffles from racing the expiry mid-flight.
const EXPIRY_SKEW_SECONDS: i64 = 240;

/// Builds the consent-page URL the user must open to authorize the bot.
pub fn authorize_url(config: &Config) -> Res<String> {
    let url = Url::parse_with_params(
        &format!("{}/authorize", config.accounts_url),
        &[
            ("client_id", config.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", config.redirect_url.as_str()),
            ("scope", SCOPES),
        ],
    )
    .map_err(|e| Error::Other(format!("invalid authorize url: {e}")))?;

    Ok(url.to_string())
}

/// Exchanges an authorization code for tokens and builds a ready-to-use
/// client around them.
pub async fn exchange_code(config: &Config, code: &str) -> Res<SpotifyClient> {
    let response = Client::new()
        .post(format!("{}/api/token", config.accounts_url))
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_url.as_str()),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(Error::from_response(response).await);
    }

    let response: TokenResponse = response.json().await?;
    let token = Token {
        access_token: response.access_token,
        refresh_token: response.refresh_token.unwrap_or_default(),
        expires_at: Utc::now().timestamp() + response.expires_in,
    };

    SpotifyClient::connect(config, token).await
}

/// Authenticated Spotify Web API client.
///
/// Owns the HTTP connection pool and the token state. The token is
/// shared behind a lock, so clones of the client refresh it exactly
/// once and all see the refreshed value.
#[derive(Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    accounts_url: String,
    client_id: String,
    client_secret: String,
    user_id: String,
    token: Arc<Mutex<Token>>,
}

impl SpotifyClient {
    /// Builds a client from freshly issued tokens, resolving the
    /// account's user id in the process.
    pub async fn connect(config: &Config, token: Token) -> Res<Self> {
        let client = SpotifyClient {
            http: Client::new(),
            api_url: config.api_url.clone(),
            accounts_url: config.accounts_url.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            user_id: String::new(),
            token: Arc::new(Mutex::new(token)),
        };

        let user: CurrentUser = client.get(&format!("{}/me", client.api_url)).await?;

        Ok(SpotifyClient {
            user_id: user.id,
            ..client
        })
    }

    /// Base URL of the Spotify Web API this client talks to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Spotify user id of the authorized account.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Returns a currently valid access token, refreshing it first when
    /// it is within the expiry skew.
    ///
    /// Refresh responses may omit a new refresh token; the old one stays
    /// in use then.
    pub async fn access_token(&self) -> Res<String> {
        let mut token = self.token.lock().await;

        if token.expires_at - Utc::now().timestamp() < EXPIRY_SKEW_SECONDS {
            let response = self
                .http
                .post(format!("{}/api/token", self.accounts_url))
                .basic_auth(&self.client_id, Some(&self.client_secret))
                .form(&[
                    ("grant_type", "refresh_token"),
                    ("refresh_token", token.refresh_token.as_str()),
                ])
                .send()
                .await?;

            if !response.status().is_success() {
                return Err(Error::from_response(response).await);
            }

            let refreshed: TokenResponse = response.json().await?;
            token.access_token = refreshed.access_token;
            token.expires_at = Utc::now().timestamp() + refreshed.expires_in;
            if let Some(refresh_token) = refreshed.refresh_token {
                token.refresh_token = refresh_token;
            }

            info!("Spotify token refreshed");
        }

        Ok(token.access_token.clone())
    }

    /// GET a JSON resource with bearer auth.
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Res<T> {
        let token = self.access_token().await?;
        let response = self.http.get(url).bearer_auth(token).send().await?;

        if !response.status().is_success() {
            return Err(Error::from_response(response).await);
        }

        Ok(response.json().await?)
    }

    /// GET a JSON resource that may legitimately be gone; 404 maps to
    /// `None`.
    pub async fn get_optional<T: DeserializeOwned>(&self, url: &str) -> Res<Option<T>> {
        let token = self.access_token().await?;
        let response = self.http.get(url).bearer_auth(token).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Error::from_response(response).await);
        }

        Ok(Some(response.json().await?))
    }

    /// POST a JSON body, decoding the JSON response.
    pub async fn post<B, T>(&self, url: &str, body: &B) -> Res<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let token = self.access_token().await?;
        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::from_response(response).await);
        }

        Ok(response.json().await?)
    }

    /// POST a JSON body where only success matters; the response body is
    /// discarded.
    pub async fn post_discard<B>(&self, url: &str, body: &B) -> Res<()>
    where
        B: Serialize + ?Sized,
    {
        let token = self.access_token().await?;
        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::from_response(response).await);
        }

        Ok(())
    }

    /// DELETE a resource where only success matters.
    pub async fn delete(&self, url: &str) -> Res<()> {
        let token = self.access_token().await?;
        let response = self.http.delete(url).bearer_auth(token).send().await?;

        if !response.status().is_success() {
            return Err(Error::from_response(response).await);
        }

        Ok(())
    }
}
