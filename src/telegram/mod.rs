//! # Telegram Integration Module
//!
//! Minimal client for the Telegram Bot API, covering exactly the three
//! methods the bot needs: long-polling `getUpdates`, `sendMessage`
//! (optionally with a single inline button) and `answerCallbackQuery`.
//!
//! Every method POSTs a typed JSON body and decodes the Bot API's
//! `{ ok, result, description }` envelope; a response with `ok: false`
//! surfaces as an error carrying Telegram's description.

use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{
    Res,
    error::Error,
    types::{
        AnswerCallbackQueryRequest, ApiResponse, GetUpdatesRequest, InlineKeyboardButton,
        InlineKeyboardMarkup, SendMessageRequest, Update,
    },
};

/// Seconds Telegram holds a `getUpdates` call open before answering
/// with an empty batch.
const POLL_TIMEOUT_SECONDS: u64 = 30;

/// Telegram Bot API client bound to one bot token.
#[derive(Clone)]
pub struct Bot {
    http: Client,
    base_url: String,
}

impl Bot {
    pub fn new(api_url: &str, token: &str) -> Self {
        Bot {
            http: Client::new(),
            base_url: format!("{api_url}/bot{token}"),
        }
    }

    /// Long-polls for updates, confirming everything below `offset` as
    /// processed on the Telegram side.
    pub async fn get_updates(&self, offset: i64) -> Res<Vec<Update>> {
        self.call(
            "getUpdates",
            &GetUpdatesRequest {
                offset,
                timeout: POLL_TIMEOUT_SECONDS,
            },
        )
        .await
    }

    /// Sends a plain-text message to a chat.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Res<()> {
        let _: Value = self
            .call(
                "sendMessage",
                &SendMessageRequest {
                    chat_id,
                    text: text.to_string(),
                    reply_markup: None,
                },
            )
            .await?;

        Ok(())
    }

    /// Sends a plain-text message carrying a single inline button.
    pub async fn send_message_with_button(
        &self,
        chat_id: i64,
        text: &str,
        button: InlineKeyboardButton,
    ) -> Res<()> {
        let _: Value = self
            .call(
                "sendMessage",
                &SendMessageRequest {
                    chat_id,
                    text: text.to_string(),
                    reply_markup: Some(InlineKeyboardMarkup {
                        inline_keyboard: vec![vec![button]],
                    }),
                },
            )
            .await?;

        Ok(())
    }

    /// Acknowledges a callback query so the client stops its spinner.
    pub async fn answer_callback_query(&self, id: &str) -> Res<()> {
        let _: Value = self
            .call(
                "answerCallbackQuery",
                &AnswerCallbackQueryRequest {
                    callback_query_id: id.to_string(),
                },
            )
            .await?;

        Ok(())
    }

    /// Calls one Bot API method and unwraps the response envelope.
    async fn call<B, T>(&self, method: &str, body: &B) -> Res<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(format!("{}/{}", self.base_url, method))
            .json(body)
            .send()
            .await?;

        let envelope: ApiResponse<T> = response.json().await?;
        if !envelope.ok {
            return Err(Error::Telegram(
                envelope
                    .description
                    .unwrap_or_else(|| format!("{method} failed without description")),
            ));
        }

        envelope
            .result
            .ok_or_else(|| Error::Telegram(format!("{method} answered ok without a result")))
    }
}
