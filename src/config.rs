//! Environment configuration.
//!
//! All runtime settings come from environment variables (optionally seeded
//! from a `.env` file before loading). Loading never fails on the first
//! problem: every missing or malformed variable is collected and reported
//! in one aggregated error so a broken deployment can be fixed in a single
//! pass.
//!
//! Required variables:
//!
//! - `SPOTIFY_BOT_TOKEN` - Telegram bot token used for all Bot API calls
//! - `SPOTIFY_CLIENT_ID` - Spotify application client id
//! - `SPOTIFY_CLIENT_SECRET` - Spotify application client secret
//! - `SPOTIFY_REDIRECT_URL` - OAuth redirect URL; must carry an explicit
//!   port, which doubles as the listen port of the local callback server
//! - `SPOTIFY_ALLOWED_USERS` - comma-separated numeric Telegram user ids
//!   allowed to drive the bot
//!
//! Optional variables (public defaults apply when unset):
//!
//! - `SPOTIFY_API_URL` - Spotify Web API base URL
//! - `SPOTIFY_ACCOUNTS_URL` - Spotify accounts service base URL
//! - `TELEGRAM_API_URL` - Telegram Bot API base URL

use reqwest::Url;

use crate::{Res, error::Error};

const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.spotify.com";
const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Fully resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token.
    pub bot_token: String,
    /// Spotify application client id.
    pub client_id: String,
    /// Spotify application client secret.
    pub client_secret: String,
    /// OAuth redirect URL registered with the Spotify application.
    pub redirect_url: String,
    /// Listen port of the local callback server, taken from the explicit
    /// port of `redirect_url`.
    pub callback_port: u16,
    /// Telegram user ids allowed to drive the bot.
    pub allowed_users: Vec<i64>,
    /// Base URL of the Spotify Web API.
    pub api_url: String,
    /// Base URL of the Spotify accounts service.
    pub accounts_url: String,
    /// Base URL of the Telegram Bot API.
    pub telegram_api_url: String,
}

impl Config {
    /// Loads the configuration from the process environment.
    pub fn from_env() -> Res<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through an arbitrary variable lookup.
    ///
    /// Every missing or malformed variable contributes one line to the
    /// aggregated [`Error::Config`]; the error is only built after all
    /// variables were inspected.
    pub fn from_lookup<F>(lookup: F) -> Res<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut problems: Vec<String> = Vec::new();

        let bot_token = required(&lookup, "SPOTIFY_BOT_TOKEN", &mut problems);
        let client_id = required(&lookup, "SPOTIFY_CLIENT_ID", &mut problems);
        let client_secret = required(&lookup, "SPOTIFY_CLIENT_SECRET", &mut problems);

        let redirect_url = required(&lookup, "SPOTIFY_REDIRECT_URL", &mut problems);
        let mut callback_port: u16 = 0;
        if let Some(url) = &redirect_url {
            match explicit_port(url) {
                Some(port) => callback_port = port,
                None => problems.push(found_with("SPOTIFY_REDIRECT_URL", url)),
            }
        }

        let allowed_raw = required(&lookup, "SPOTIFY_ALLOWED_USERS", &mut problems);
        let mut allowed_users: Vec<i64> = Vec::new();
        if let Some(raw) = &allowed_raw {
            match parse_allowed_users(raw) {
                Some(users) => allowed_users = users,
                None => problems.push(found_with("SPOTIFY_ALLOWED_USERS", raw)),
            }
        }

        if !problems.is_empty() {
            return Err(Error::Config(problems));
        }

        // An empty problem list means every required value is present.
        Ok(Config {
            bot_token: bot_token.unwrap_or_default(),
            client_id: client_id.unwrap_or_default(),
            client_secret: client_secret.unwrap_or_default(),
            redirect_url: redirect_url.unwrap_or_default(),
            callback_port,
            allowed_users,
            api_url: optional(&lookup, "SPOTIFY_API_URL", DEFAULT_API_URL),
            accounts_url: optional(&lookup, "SPOTIFY_ACCOUNTS_URL", DEFAULT_ACCOUNTS_URL),
            telegram_api_url: optional(&lookup, "TELEGRAM_API_URL", DEFAULT_TELEGRAM_API_URL),
        })
    }

    /// Checks whether a Telegram user id is on the allow-list.
    pub fn is_allowed(&self, user_id: i64) -> bool {
        self.allowed_users.contains(&user_id)
    }
}

/// Looks up a required variable, recording a problem line when it is
/// missing or blank.
fn required<F>(lookup: &F, key: &str, problems: &mut Vec<String>) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).filter(|value| !value.trim().is_empty()) {
        Some(value) => Some(value),
        None => {
            problems.push(format!("[{key}] configuration missing"));
            None
        }
    }
}

/// Looks up an optional variable, falling back to a default.
fn optional<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Formats the problem line for a variable that is present but unusable.
fn found_with(key: &str, value: &str) -> String {
    format!("[{key}] configuration found with [{value}]")
}

/// Extracts the explicit port of a URL; `None` when absent or unparsable.
fn explicit_port(url: &str) -> Option<u16> {
    Url::parse(url).ok()?.port()
}

/// Parses a comma-separated list of numeric Telegram user ids.
///
/// Whitespace around entries is tolerated; an empty list or any
/// non-numeric entry makes the whole value unusable.
fn parse_allowed_users(raw: &str) -> Option<Vec<i64>> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect();

    if entries.is_empty() {
        return None;
    }

    entries.iter().map(|entry| entry.parse::<i64>().ok()).collect()
}
