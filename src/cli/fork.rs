use crate::{
    config::AppConfig,
    error, playlist,
    spotify::{SpotifyApi, SpotifyClient},
    success,
    types::PlaylistRef,
    utils,
};

use super::spinner;

pub async fn fork(config: AppConfig, token: String, source: String, owner: String, public: bool) {
    let Some(playlist_id) = utils::parse_playlist_id(&source) else {
        error!("'{}' is not a playlist id or link", source);
    };

    let client = SpotifyClient::new(config);
    let me = match client.current_user(&token).await {
        Ok(me) => me,
        Err(e) => error!("Failed to get user information: {}", e),
    };

    let pb = spinner(&format!("Forking {playlist_id}..."));
    let result = playlist::fork(&client, &token, &playlist_id, &owner, &me.id, public).await;
    pb.finish_and_clear();

    match result {
        Ok(outcome) => success!(
            "Created {} with {} tracks ({})",
            outcome.name,
            outcome.tracks_written,
            outcome.playlist_id
        ),
        Err(e) => error!("{}", e),
    }
}

pub async fn merge(config: AppConfig, token: String, sources: Vec<PlaylistRef>, public: bool) {
    let client = SpotifyClient::new(config);
    let me = match client.current_user(&token).await {
        Ok(me) => me,
        Err(e) => error!("Failed to get user information: {}", e),
    };

    let pb = spinner(&format!("Merging {} playlists...", sources.len()));
    let result = playlist::merge(&client, &token, &sources, &me.id, public).await;
    pb.finish_and_clear();

    match result {
        Ok(outcome) => success!(
            "Created {} with {} tracks ({})",
            outcome.name,
            outcome.tracks_written,
            outcome.playlist_id
        ),
        Err(e) => error!("{}", e),
    }
}
