use std::sync::Arc;

use crate::{
    Res,
    api::CallbackState,
    context::Context,
    management::code_handoff,
    server::CallbackServer,
    spotify, success,
};

/// Runs the interactive Spotify login.
///
/// Starts the callback listener, sends the consent URL into the chat and
/// suspends until the redirect delivers an authorization code. The code
/// is exchanged for tokens and the resulting client becomes the process
/// session. The listener is torn down on every exit path; on the error
/// paths its drop handler takes care of that.
///
/// There is deliberately no timeout: if the user never follows the URL
/// the operation (and the gate it holds) waits forever.
pub async fn run(ctx: &Context, chat_id: i64) -> Res<()> {
    let url = spotify::authorize_url(&ctx.config)?;

    let (sender, handoff) = code_handoff();
    let state = Arc::new(CallbackState {
        sender,
        bot: ctx.bot.clone(),
        chat_id,
    });
    let server = CallbackServer::start(ctx.config.callback_port, state).await?;

    ctx.bot
        .send_message(chat_id, &format!("Log in via {url}"))
        .await?;

    let code = handoff.receive().await?;
    let client = spotify::exchange_code(&ctx.config, &code).await?;
    ctx.session.set(client).await;
    success!("Spotify session established");

    server.stop().await;
    Ok(())
}
