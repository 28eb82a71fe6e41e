//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! playlist engines and the predictive search. It is split into the
//! [`SpotifyApi`] trait, which names every remote operation Spotifork needs,
//! and [`SpotifyClient`], the `reqwest` implementation talking to Spotify.
//!
//! ## Architecture
//!
//! ```text
//! Front ends (HTTP handlers, CLI)
//!          ↓
//! Engines (playlist, predict)
//!          ↓
//! SpotifyApi trait
//!          ↓
//! SpotifyClient (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Credentials
//!
//! The client owns the application credentials (client id, secret, redirect
//! URI) and nothing else. The user's access token is passed to every call as
//! `token`, so a single client is shared by all concurrent requests without
//! holding any per-user state.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Authorization code exchange
//! - `GET /me`, `GET /users/{id}` - User profiles
//! - `GET /playlists/{id}` - Playlist name, owner and track count
//! - `GET /playlists/{id}/tracks` - Paginated track ids
//! - `POST /users/{id}/playlists` - Create playlist
//! - `PUT /playlists/{id}` - Rename playlist
//! - `POST /playlists/{id}/tracks` - Append up to 100 tracks
//! - `GET /users/{id}/playlists` - List a user's playlists
//! - `GET /search?type=playlist` - Playlist search
//!
//! ## Error Handling
//!
//! Failures are never retried. Non-success statuses map to
//! [`SpotiforkError::Api`](crate::error::SpotiforkError::Api), 404 maps to
//! [`SpotiforkError::NotFound`](crate::error::SpotiforkError::NotFound).

use async_trait::async_trait;

use crate::{
    error::Result,
    types::{CreatePlaylistResponse, Credential, Playlist, PlaylistPage, PlaylistTracksPage, TrackRef, UserProfile},
};

pub mod auth;
mod client;

pub use client::SpotifyClient;

/// Page size for playlist track listings and the maximum number of tracks per append.
pub const TRACK_PAGE_SIZE: usize = 100;

/// Page size for playlist listings and searches.
pub const PLAYLIST_PAGE_SIZE: usize = 50;

/// Remote operations on the Spotify Web API.
#[async_trait]
pub trait SpotifyApi: Send + Sync {
    /// URL the user is sent to in order to grant access.
    fn authorize_url(&self, state: &str) -> String;

    /// Exchange an authorization code for a credential.
    async fn exchange_code(&self, code: &str) -> Result<Credential>;

    /// Profile of the user owning `token`.
    async fn current_user(&self, token: &str) -> Result<UserProfile>;

    async fn get_user(&self, token: &str, user_id: &str) -> Result<UserProfile>;

    /// Playlist id, name and track total. Fails with not-found when the
    /// playlist is not owned by `owner_id`.
    async fn get_playlist(&self, token: &str, owner_id: &str, playlist_id: &str) -> Result<Playlist>;

    async fn get_playlist_tracks(
        &self,
        token: &str,
        playlist_id: &str,
        offset: usize,
        limit: usize,
    ) -> Result<PlaylistTracksPage>;

    async fn create_playlist(
        &self,
        token: &str,
        owner_id: &str,
        name: &str,
        public: bool,
    ) -> Result<CreatePlaylistResponse>;

    async fn change_playlist_details(
        &self,
        token: &str,
        playlist_id: &str,
        name: &str,
        public: bool,
    ) -> Result<()>;

    /// Append tracks to the end of a playlist. At most [`TRACK_PAGE_SIZE`] per call.
    async fn add_tracks(&self, token: &str, playlist_id: &str, uris: &[TrackRef]) -> Result<()>;

    async fn user_playlists(
        &self,
        token: &str,
        user_id: &str,
        offset: usize,
        limit: usize,
    ) -> Result<PlaylistPage>;

    async fn search_playlists(
        &self,
        token: &str,
        query: &str,
        offset: usize,
        limit: usize,
    ) -> Result<PlaylistPage>;
}
