//! Configuration management for Spotifork.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including Spotify API credentials, endpoints and server settings.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::error::{Result, SpotiforkError};

pub const SERVER_ADDRESS: &str = "SERVER_ADDRESS";
pub const SPOTIFY_API_AUTH_CLIENT_ID: &str = "SPOTIFY_API_AUTH_CLIENT_ID";
pub const SPOTIFY_API_AUTH_CLIENT_SECRET: &str = "SPOTIFY_API_AUTH_CLIENT_SECRET";
pub const SPOTIFY_API_REDIRECT_URI: &str = "SPOTIFY_API_REDIRECT_URI";
pub const SPOTIFY_API_AUTH_SCOPE: &str = "SPOTIFY_API_AUTH_SCOPE";
pub const SPOTIFY_API_AUTH_URL: &str = "SPOTIFY_API_AUTH_URL";
pub const SPOTIFY_API_TOKEN_URL: &str = "SPOTIFY_API_TOKEN_URL";
pub const SPOTIFY_API_URL: &str = "SPOTIFY_API_URL";

const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
const DEFAULT_SCOPE: &str = "playlist-read-private playlist-modify-public playlist-modify-private";
const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `spotifork/.env`.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spotifork/.env`
/// - macOS: `~/Library/Application Support/spotifork/.env`
/// - Windows: `%LOCALAPPDATA%/spotifork/.env`
///
/// A missing `.env` file is not an error; the process environment alone is
/// then used.
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - The `.env` file exists but cannot be parsed
pub async fn load_env() -> std::result::Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotifork/.env");
    path
}

/// Settings for the Spotify client and the HTTP server.
///
/// The client id, client secret and redirect URI are required; every other
/// value falls back to the public Spotify endpoints and the default port of
/// the web front end.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_addr: String,
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scope: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
}

impl AppConfig {
    /// Builds the configuration from the process environment.
    ///
    /// # Example
    ///
    /// ```
    /// let config = AppConfig::from_env()?;
    /// println!("listening on {}", config.server_addr);
    /// ```
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated like missing ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            value(key).ok_or_else(|| SpotiforkError::Config(format!("{key} must be set")))
        };
        let or_default = |key: &str, default: &str| value(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            server_addr: or_default(SERVER_ADDRESS, DEFAULT_SERVER_ADDRESS),
            client_id: required(SPOTIFY_API_AUTH_CLIENT_ID)?,
            client_secret: required(SPOTIFY_API_AUTH_CLIENT_SECRET)?,
            redirect_uri: required(SPOTIFY_API_REDIRECT_URI)?,
            scope: or_default(SPOTIFY_API_AUTH_SCOPE, DEFAULT_SCOPE),
            auth_url: or_default(SPOTIFY_API_AUTH_URL, DEFAULT_AUTH_URL),
            token_url: or_default(SPOTIFY_API_TOKEN_URL, DEFAULT_TOKEN_URL),
            api_url: or_default(SPOTIFY_API_URL, DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
        })
    }
}
