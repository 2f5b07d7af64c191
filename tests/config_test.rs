use std::collections::HashMap;

use shufbot::config::Config;
use shufbot::error::Error;

// Helper function to create a complete, valid environment
fn full_env() -> HashMap<String, String> {
    [
        ("SPOTIFY_BOT_TOKEN", "tg-token"),
        ("SPOTIFY_CLIENT_ID", "client-id"),
        ("SPOTIFY_CLIENT_SECRET", "client-secret"),
        ("SPOTIFY_REDIRECT_URL", "http://localhost:8888/callback"),
        ("SPOTIFY_ALLOWED_USERS", "1001, 2002,3003"),
    ]
    .iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect()
}

fn load(env: &HashMap<String, String>) -> Result<Config, Error> {
    Config::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn test_full_environment_parses() {
    let config = load(&full_env()).unwrap();

    assert_eq!(config.bot_token, "tg-token");
    assert_eq!(config.client_id, "client-id");
    assert_eq!(config.client_secret, "client-secret");
    assert_eq!(config.redirect_url, "http://localhost:8888/callback");

    // The callback port comes out of the redirect URL
    assert_eq!(config.callback_port, 8888);

    // The allow-list is parsed to numeric ids, whitespace tolerated
    assert_eq!(config.allowed_users, vec![1001, 2002, 3003]);

    // Unset base URLs fall back to the public endpoints
    assert_eq!(config.api_url, "https://api.spotify.com/v1");
    assert_eq!(config.accounts_url, "https://accounts.spotify.com");
    assert_eq!(config.telegram_api_url, "https://api.telegram.org");
}

#[test]
fn test_base_url_overrides_apply() {
    let mut env = full_env();
    env.insert("SPOTIFY_API_URL".to_string(), "http://127.0.0.1:4000/v1".to_string());
    env.insert(
        "SPOTIFY_ACCOUNTS_URL".to_string(),
        "http://127.0.0.1:4000/accounts".to_string(),
    );
    env.insert("TELEGRAM_API_URL".to_string(), "http://127.0.0.1:4001".to_string());

    let config = load(&env).unwrap();

    assert_eq!(config.api_url, "http://127.0.0.1:4000/v1");
    assert_eq!(config.accounts_url, "http://127.0.0.1:4000/accounts");
    assert_eq!(config.telegram_api_url, "http://127.0.0.1:4001");
}

#[test]
fn test_missing_keys_are_reported_together() {
    let mut env = full_env();
    env.remove("SPOTIFY_CLIENT_SECRET");
    env.remove("SPOTIFY_ALLOWED_USERS");

    let message = load(&env).unwrap_err().to_string();

    // One aggregated message naming exactly the two missing keys
    assert_eq!(
        message,
        "Environment failed to load:\n\
         [SPOTIFY_CLIENT_SECRET] configuration missing\n\
         [SPOTIFY_ALLOWED_USERS] configuration missing"
    );
}

#[test]
fn test_blank_value_counts_as_missing() {
    let mut env = full_env();
    env.insert("SPOTIFY_BOT_TOKEN".to_string(), "   ".to_string());

    let message = load(&env).unwrap_err().to_string();
    assert!(message.contains("[SPOTIFY_BOT_TOKEN] configuration missing"));
}

#[test]
fn test_malformed_allow_list_entry() {
    let mut env = full_env();
    env.insert("SPOTIFY_ALLOWED_USERS".to_string(), "1001,abc".to_string());

    let message = load(&env).unwrap_err().to_string();
    assert!(message.contains("[SPOTIFY_ALLOWED_USERS] configuration found with [1001,abc]"));
}

#[test]
fn test_effectively_empty_allow_list_is_malformed() {
    let mut env = full_env();
    env.insert("SPOTIFY_ALLOWED_USERS".to_string(), " , ,".to_string());

    let message = load(&env).unwrap_err().to_string();
    assert!(message.contains("[SPOTIFY_ALLOWED_USERS] configuration found with"));
}

#[test]
fn test_redirect_url_without_explicit_port_is_malformed() {
    let mut env = full_env();
    env.insert(
        "SPOTIFY_REDIRECT_URL".to_string(),
        "https://example.com/callback".to_string(),
    );

    let message = load(&env).unwrap_err().to_string();
    assert!(message.contains(
        "[SPOTIFY_REDIRECT_URL] configuration found with [https://example.com/callback]"
    ));
}

#[test]
fn test_unparsable_redirect_url_is_malformed() {
    let mut env = full_env();
    env.insert("SPOTIFY_REDIRECT_URL".to_string(), "not a url".to_string());

    let message = load(&env).unwrap_err().to_string();
    assert!(message.contains("[SPOTIFY_REDIRECT_URL] configuration found with [not a url]"));
}

#[test]
fn test_empty_environment_reports_every_required_key() {
    let env = HashMap::new();
    let message = load(&env).unwrap_err().to_string();

    for key in [
        "SPOTIFY_BOT_TOKEN",
        "SPOTIFY_CLIENT_ID",
        "SPOTIFY_CLIENT_SECRET",
        "SPOTIFY_REDIRECT_URL",
        "SPOTIFY_ALLOWED_USERS",
    ] {
        assert!(message.contains(&format!("[{key}] configuration missing")));
    }
}

#[test]
fn test_is_allowed() {
    let config = load(&full_env()).unwrap();

    assert!(config.is_allowed(1001));
    assert!(config.is_allowed(3003));
    assert!(!config.is_allowed(42));
}
