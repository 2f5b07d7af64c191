//! # Spotify Integration Module
//!
//! This module provides the complete interface to the Spotify Web API used by
//! the bot: the OAuth authorization-code flow, an authenticated client with
//! transparent token refresh, and the playlist and library operations the
//! shuffle workflow is built from. It is the only place in the crate that
//! talks to Spotify.
//!
//! ## Overview
//!
//! Operations are free async functions that borrow a [`SpotifyClient`]. The
//! client owns the HTTP connection pool and the token state, so it clones
//! cheaply and a single login's client can be stored in the session and shared
//! by every later operation.
//!
//! ## Architecture
//!
//! ```text
//! Operation Layer (handlers)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (authorization-code flow, token refresh)
//!     ├── Playlist Operations (list, find, create, unfollow, append)
//!     └── Library Operations (saved tracks, offset paging)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 authorization-code flow:
//! - **Consent URL**: Builds the authorization URL with the bot's fixed scopes
//! - **Code Exchange**: Trades the authorization code for tokens using HTTP
//!   basic auth with the client credentials
//! - **Token Refresh**: Refreshes access tokens transparently, four minutes
//!   before nominal expiry, behind a shared lock so clones refresh once
//! - **Request Helpers**: Bearer-authenticated GET/POST/DELETE with typed
//!   JSON decoding and uniform status handling
//!
//! ### Playlist Module
//!
//! [`playlists`] - Handles playlist-related API operations:
//! - **Listing**: Walks `GET /me/playlists` via `next` links to exhaustion
//! - **Lookup**: Exact-name search and by-id fetch (404 maps to `None`)
//! - **Replacement Primitives**: Private playlist creation, unfollow, and
//!   batched track appends of at most 100 URIs per request
//!
//! ### Library Module
//!
//! [`library`] - Reads the user's saved tracks ("Liked songs"):
//! - **Offset Paging**: One `GET /me/tracks` page per fetch, 50 tracks each
//! - **Lazy Streaming**: Pages materialize only as the consumer polls them
//!
//! ## API Coverage
//!
//! - `GET /me` - Current user id, resolved once at login
//! - `GET /me/playlists` - The user's playlists, paged
//! - `GET /me/tracks` - Saved tracks, offset/limit paged
//! - `GET /playlists/{id}` - Playlist existence and name
//! - `GET /playlists/{id}/tracks` - A playlist's track listing, paged
//! - `POST /users/{user_id}/playlists` - Create the shuffled playlist
//! - `POST /playlists/{id}/tracks` - Append one batch of track URIs
//! - `DELETE /playlists/{id}/followers` - Remove a stale shuffled playlist
//! - `POST /api/token` - Code exchange and token refresh (accounts service)
//!
//! ## Error Handling
//!
//! Every non-success status surfaces as [`crate::error::Error::Api`] carrying
//! the status and response body; transport failures map from
//! `reqwest::Error`. The one deliberate exception is the by-id playlist
//! lookup, where 404 is an expected answer and becomes `None`.

mod auth;
mod library;
mod playlists;

pub use auth::{SpotifyClient, authorize_url, exchange_code};
pub use library::{SAVED_TRACKS_PAGE_SIZE, saved_track_pages, saved_tracks_page};
pub use playlists::{
    add_tracks, all_playlists, create_playlist, find_by_name, get_playlist,
    playlist_track_uris, unfollow_playlist,
};
