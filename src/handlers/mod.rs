//! # Handlers Module
//!
//! The long-poll dispatch loop and the operations it routes to. Every
//! inbound update is handled in its own task; the operation gate makes
//! sure only one login or shuffle actually runs at a time, everything
//! else is answered with a busy notice.
//!
//! Guard order for commands is allow-list first, gate second, so an
//! unauthorized user can never observe (or occupy) the gate. Button
//! callbacks skip the allow-list: the buttons only exist in chats the
//! bot already talked to.

mod login;
mod shuffle;

use std::{sync::Arc, time::Duration};

use crate::{
    Res,
    context::Context,
    info,
    types::{CallbackQuery, Message, Update},
    warning,
};

/// Seconds to wait after a failed poll before polling again.
const POLL_RETRY_SECONDS: u64 = 5;

/// Runs the long-poll dispatch loop. Does not return.
pub async fn run(ctx: Arc<Context>) {
    info!("Listening for Telegram updates");
    let mut offset: i64 = 0;

    loop {
        match ctx.bot.get_updates(offset).await {
            Ok(updates) => {
                for update in updates {
                    offset = offset.max(update.update_id + 1);
                    tokio::spawn(handle_update(ctx.clone(), update));
                }
            }
            Err(e) => {
                warning!("Polling for updates failed: {e}");
                tokio::time::sleep(Duration::from_secs(POLL_RETRY_SECONDS)).await;
            }
        }
    }
}

/// Routes one update to its handler and reports failures back into the
/// chat, so an aborted operation is never silent.
pub async fn handle_update(ctx: Arc<Context>, update: Update) {
    let (chat_id, outcome) = if let Some(message) = update.message {
        let chat_id = message.chat.id;
        (Some(chat_id), handle_message(&ctx, message).await)
    } else if let Some(query) = update.callback_query {
        let chat_id = query.message.as_ref().map(|message| message.chat.id);
        (chat_id, handle_callback(&ctx, query).await)
    } else {
        (None, Ok(()))
    };

    if let Err(e) = outcome {
        warning!("Operation failed: {e}");
        if let Some(chat_id) = chat_id {
            if let Err(e) = ctx
                .bot
                .send_message(chat_id, &format!("Something went wrong: {e}"))
                .await
            {
                warning!("Could not report the failure to the chat: {e}");
            }
        }
    }
}

/// Handles a chat message carrying one of the bot's commands.
async fn handle_message(ctx: &Context, message: Message) -> Res<()> {
    let Some(text) = message.text.as_deref().map(str::trim) else {
        return Ok(());
    };
    // Group clients address commands as /command@botname
    let command = text
        .split_whitespace()
        .next()
        .map(|token| token.split('@').next().unwrap_or(token))
        .unwrap_or("");
    if command != "/start" && command != "/shuffle" {
        return Ok(());
    }

    let chat_id = message.chat.id;
    let allowed = message
        .from
        .as_ref()
        .is_some_and(|from| ctx.config.is_allowed(from.id));
    if !allowed {
        ctx.bot
            .send_message(chat_id, "You are not allowed to use this bot")
            .await?;
        return Ok(());
    }

    let Some(_permit) = ctx.gate.try_acquire() else {
        ctx.bot
            .send_message(chat_id, "Sorry, I'm busy right now")
            .await?;
        return Ok(());
    };

    match command {
        "/start" => login::run(ctx, chat_id).await,
        _ => shuffle::menu(ctx, chat_id).await,
    }
}

/// Handles an inline button press.
async fn handle_callback(ctx: &Context, query: CallbackQuery) -> Res<()> {
    if let Err(e) = ctx.bot.answer_callback_query(&query.id).await {
        warning!("Could not acknowledge a callback query: {e}");
    }

    let Some(target) = query
        .data
        .as_deref()
        .and_then(|data| data.strip_prefix("shuffle"))
    else {
        return Ok(());
    };
    let Some(chat_id) = query.message.as_ref().map(|message| message.chat.id) else {
        return Ok(());
    };

    let Some(_permit) = ctx.gate.try_acquire() else {
        ctx.bot
            .send_message(chat_id, "Sorry, I'm busy right now")
            .await?;
        return Ok(());
    };

    shuffle::run(ctx, chat_id, target).await
}
