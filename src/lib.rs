//! Spotify Shuffle Bot Library
//!
//! This library implements a Telegram bot that logs into the Spotify Web API
//! on behalf of a single user and recreates a playlist (or the saved-tracks
//! library) in shuffled order as a new playlist. All interaction happens via
//! chat commands and inline button callbacks; a short-lived local HTTP
//! endpoint exists only to catch the OAuth redirect.
//!
//! # Modules
//!
//! - `api` - HTTP endpoint for the local OAuth callback server
//! - `config` - Environment configuration with aggregated error reporting
//! - `context` - Process-wide state shared by all handlers
//! - `error` - The crate-wide error type
//! - `handlers` - Update dispatch and the login/shuffle operations
//! - `management` - Session store, operation gate and code handoff
//! - `paging` - Lazy offset/limit page streaming
//! - `server` - Local HTTP server for the OAuth callback
//! - `spotify` - Spotify Web API client implementation
//! - `telegram` - Telegram Bot API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Shuffling, batching and naming helpers

pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod handlers;
pub mod management;
pub mod paging;
pub mod server;
pub mod spotify;
pub mod telegram;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used throughout the crate for every fallible operation; the error side
/// is the crate-wide [`error::Error`] enum.
pub type Res<T> = std::result::Result<T, error::Error>;

/// Prints an informational message with a blue bullet point.
///
/// Accepts the same arguments as `println!`.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Accepts the same arguments as `println!`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1, so it is reserved for startup
/// failures where continuing makes no sense (e.g. unusable configuration).
/// Operations triggered from chat must never use this macro; they report
/// back to the chat and keep the process alive.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable anomalies the process survives, like a duplicate
/// OAuth callback or a failed poll that will be retried.
///
/// Accepts the same arguments as `println!`.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
