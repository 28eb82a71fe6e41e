use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{
    config::AppConfig,
    error::{Result, SpotiforkError},
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, ChangePlaylistDetailsRequest,
        CreatePlaylistRequest, CreatePlaylistResponse, Credential, Playlist, PlaylistPage,
        PlaylistTracksPage, SearchPlaylistsResponse, SpotifyErrorBody, TrackRef, UserProfile,
    },
};

use super::{SpotifyApi, auth};

const PLAYLIST_FIELDS: &str = "id,name,owner(id,display_name),tracks.total";
const PLAYLIST_TRACK_FIELDS: &str = "items(track(id)),total,next";

/// `reqwest` implementation of [`SpotifyApi`].
///
/// Holds the application configuration and a pooled HTTP client. It keeps no
/// user credential; the access token is supplied with every call.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    config: AppConfig,
    http: Client,
}

impl SpotifyClient {
    pub fn new(config: AppConfig) -> Self {
        Self::with_http(config, Client::new())
    }

    pub fn with_http(config: AppConfig, http: Client) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url, path)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = check_status(request.send().await?).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Turns a non-success response into [`SpotiforkError::Api`].
///
/// The message is taken from Spotify's `{"error": {"message": ..}}` body when
/// present, otherwise from the raw body or the status reason.
pub(crate) async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<SpotifyErrorBody>(&text)
        .ok()
        .map(|body| body.error.message)
        .filter(|m| !m.is_empty())
        .or_else(|| Some(text.trim().to_string()).filter(|t| !t.is_empty()))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });

    Err(SpotiforkError::Api {
        status: status.as_u16(),
        message,
    })
}

fn not_found_as(err: SpotiforkError, entity: &str, id: &str) -> SpotiforkError {
    match err {
        SpotiforkError::Api { status: 404, .. } => SpotiforkError::not_found(entity, id),
        other => other,
    }
}

fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[async_trait]
impl SpotifyApi for SpotifyClient {
    fn authorize_url(&self, state: &str) -> String {
        auth::authorize_url(&self.config, state)
    }

    async fn exchange_code(&self, code: &str) -> Result<Credential> {
        auth::exchange_code(&self.http, &self.config, code)
            .await
            .map_err(|e| match e {
                SpotiforkError::Api { message, .. } => SpotiforkError::Auth(message),
                other => other,
            })
    }

    async fn current_user(&self, token: &str) -> Result<UserProfile> {
        let request = self.http.get(self.url("/me")).bearer_auth(token);
        self.send_json(request).await
    }

    async fn get_user(&self, token: &str, user_id: &str) -> Result<UserProfile> {
        let request = self
            .http
            .get(self.url(&format!("/users/{}", segment(user_id))))
            .bearer_auth(token);

        self.send_json(request)
            .await
            .map_err(|e| not_found_as(e, "User", user_id))
    }

    async fn get_playlist(&self, token: &str, owner_id: &str, playlist_id: &str) -> Result<Playlist> {
        let request = self
            .http
            .get(self.url(&format!("/playlists/{}", segment(playlist_id))))
            .query(&[("fields", PLAYLIST_FIELDS)])
            .bearer_auth(token);

        let playlist: Playlist = self
            .send_json(request)
            .await
            .map_err(|e| not_found_as(e, "Playlist", playlist_id))?;

        if playlist.owner.id != owner_id {
            return Err(SpotiforkError::not_found(
                "Playlist",
                format!("{playlist_id} (owned by {owner_id})"),
            ));
        }

        Ok(playlist)
    }

    async fn get_playlist_tracks(
        &self,
        token: &str,
        playlist_id: &str,
        offset: usize,
        limit: usize,
    ) -> Result<PlaylistTracksPage> {
        let request = self
            .http
            .get(self.url(&format!("/playlists/{}/tracks", segment(playlist_id))))
            .query(&[
                ("fields", PLAYLIST_TRACK_FIELDS.to_string()),
                ("offset", offset.to_string()),
                ("limit", limit.to_string()),
            ])
            .bearer_auth(token);

        self.send_json(request)
            .await
            .map_err(|e| not_found_as(e, "Playlist", playlist_id))
    }

    async fn create_playlist(
        &self,
        token: &str,
        owner_id: &str,
        name: &str,
        public: bool,
    ) -> Result<CreatePlaylistResponse> {
        let body = CreatePlaylistRequest {
            name: name.to_string(),
            public,
            collaborative: false,
        };

        let request = self
            .http
            .post(self.url(&format!("/users/{}/playlists", segment(owner_id))))
            .bearer_auth(token)
            .json(&body);

        self.send_json(request).await
    }

    async fn change_playlist_details(
        &self,
        token: &str,
        playlist_id: &str,
        name: &str,
        public: bool,
    ) -> Result<()> {
        let body = ChangePlaylistDetailsRequest {
            name: name.to_string(),
            public,
        };

        let response = self
            .http
            .put(self.url(&format!("/playlists/{}", segment(playlist_id))))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        check_status(response)
            .await
            .map_err(|e| not_found_as(e, "Playlist", playlist_id))?;
        Ok(())
    }

    async fn add_tracks(&self, token: &str, playlist_id: &str, uris: &[TrackRef]) -> Result<()> {
        let body = AddTrackToPlaylistRequest {
            uris: uris.to_vec(),
        };

        let request = self
            .http
            .post(self.url(&format!("/playlists/{}/tracks", segment(playlist_id))))
            .bearer_auth(token)
            .json(&body);

        let _: AddTrackToPlaylistResponse = self
            .send_json(request)
            .await
            .map_err(|e| not_found_as(e, "Playlist", playlist_id))?;
        Ok(())
    }

    async fn user_playlists(
        &self,
        token: &str,
        user_id: &str,
        offset: usize,
        limit: usize,
    ) -> Result<PlaylistPage> {
        let request = self
            .http
            .get(self.url(&format!("/users/{}/playlists", segment(user_id))))
            .query(&[("offset", offset), ("limit", limit)])
            .bearer_auth(token);

        self.send_json(request)
            .await
            .map_err(|e| not_found_as(e, "User", user_id))
    }

    async fn search_playlists(
        &self,
        token: &str,
        query: &str,
        offset: usize,
        limit: usize,
    ) -> Result<PlaylistPage> {
        let request = self
            .http
            .get(self.url("/search"))
            .query(&[
                ("type", "playlist".to_string()),
                ("q", query.to_string()),
                ("offset", offset.to_string()),
                ("limit", limit.to_string()),
            ])
            .bearer_auth(token);

        let response: SearchPlaylistsResponse = self.send_json(request).await?;
        Ok(response.playlists)
    }
}
