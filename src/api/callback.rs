use std::sync::Arc;

use axum::{Extension, extract::Query, response::Html};

use crate::{management::CodeSender, success, telegram::Bot, warning};

/// Everything the callback endpoint needs to finish a login: the
/// rendezvous to drop the code into and the chat to notify.
pub struct CallbackState {
    pub sender: CodeSender,
    pub bot: Bot,
    pub chat_id: i64,
}

/// Handles the OAuth redirect from Spotify.
///
/// The authorization code is the value of the first query parameter,
/// whatever its name. Delivery is attempted exactly once per rendezvous;
/// a late or duplicate redirect is logged and otherwise ignored. The
/// browser always gets a 200 page.
pub async fn callback(
    Extension(state): Extension<Arc<CallbackState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Html<&'static str> {
    let Some((_, code)) = params.into_iter().next() else {
        warning!("OAuth callback arrived without query parameters");
        return Html("<h1>Login failed, you can close this window.</h1>");
    };

    if state.sender.deliver(code) {
        success!("Authorization code received");
        if let Err(e) = state
            .bot
            .send_message(state.chat_id, "Logged in to Spotify")
            .await
        {
            warning!("Could not announce the login in chat: {e}");
        }
        Html("<h1>Logged in, you can close this window.</h1>")
    } else {
        warning!("Ignoring a duplicate OAuth callback");
        Html("<h1>Already logged in, you can close this window.</h1>")
    }
}
