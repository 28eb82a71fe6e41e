//! # CLI Module
//!
//! Command-line front end for Spotifork. It offers the same actions as the
//! web front end for a user who already holds an access token, plus the
//! command that starts the web server.
//!
//! ## Commands
//!
//! - [`serve`] - Starts the HTTP front end
//! - [`fork`] - Copies one playlist into the token owner's account
//! - [`merge`] - Combines several playlists into a new one
//! - [`predict`] - Prints playlists matching a partial name
//!
//! ## Credentials
//!
//! Commands other than `serve` need an access token (`--token` or the
//! `SPOTIFORK_ACCESS_TOKEN` environment variable). The token is handed to
//! each engine call as is; it is never stored.
//!
//! ## Error Handling
//!
//! Commands run to completion or terminate the process through the
//! [`error!`](crate::error!) macro with the failing step's message.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

mod fork;
mod predict;
mod serve;

pub use fork::{fork, merge};
pub use predict::predict;
pub use serve::serve;

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
