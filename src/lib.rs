//! Spotifork Library
//!
//! This library lets a Spotify user copy ("fork") a playlist into their own
//! account or combine ("merge") several playlists into a single deduplicated
//! one. It includes the Spotify Web API client, the playlist engines, the
//! predictive playlist search and the HTTP and command-line front ends.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the browser front end
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Structured error type shared by all engines
//! - `playlist` - Aggregation, fork, merge and batched track writing
//! - `predict` - Predictive playlist search
//! - `server` - HTTP server and router
//! - `session` - Cookie based session transport
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spotifork::{config, playlist, spotify::{SpotifyApi, SpotifyClient}};
//!
//! #[tokio::main]
//! async fn main() -> spotifork::Res<()> {
//!     config::load_env().await?;
//!     let client = SpotifyClient::new(config::AppConfig::from_env()?);
//!     let token = "BQC...";
//!     let me = client.current_user(token).await?;
//!     playlist::fork(&client, token, "37i9dQZF1DXcBWIGoYBM5M", "spotify", &me.id, false).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod playlist;
pub mod predict;
pub mod server;
pub mod session;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for process-level operations that may fail.
///
/// Engines return the structured [`error::Result`]; this boxed alias is used
/// at the outer edges (server start-up, environment loading) where any error
/// is only reported and never inspected.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching tracks of {}", playlist_id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Forked {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used at process boundaries (CLI commands, server start-up). Request
/// handlers and engines return errors instead.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
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
/// Used for recoverable issues such as tracks that cannot be copied.
///
/// # Example
///
/// ```
/// warning!("Skipping local track in {}", playlist_id);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
