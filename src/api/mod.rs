//! # API Module
//!
//! This module provides the HTTP endpoint for the bot's local OAuth callback
//! server. It implements the single route Spotify's authorization redirect
//! lands on.
//!
//! ## Overview
//!
//! During a login the bot sends a consent URL into the chat and starts a
//! short-lived local listener. When the user approves access, Spotify
//! redirects the browser to that listener with an authorization code; the
//! handler here hands the code to the suspended login operation and tells the
//! chat the login went through.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`callback`] - Handles the OAuth redirect from Spotify's authorization
//!   server. Extracts the authorization code, delivers it through the
//!   one-shot rendezvous exactly once, and always answers with a small HTML
//!   page the user can close.
//!
//! ## Architecture
//!
//! The module is built using the [Axum](https://docs.rs/axum) web framework.
//! The handler receives its state (the code rendezvous, the chat client and
//! the chat to notify) through an axum `Extension` layer; the surrounding
//! server lives in [`crate::server`] and exists only for the duration of one
//! login attempt.

mod callback;

pub use callback::{CallbackState, callback};
