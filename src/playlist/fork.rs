use crate::{
    error::Result,
    spotify::SpotifyApi,
    success,
    types::{AggregateResult, ForkOutcome},
};

use super::{aggregate::append_playlist, write_tracks};

/// Copies a playlist into `target_user`'s account as `"Fork of <name>"`.
///
/// # Arguments
///
/// * `api` - Spotify API implementation
/// * `token` - Access token of the acting user
/// * `source_playlist` - Id of the playlist to copy
/// * `source_owner` - Id of the user owning the source playlist
/// * `target_user` - Id of the user receiving the copy
/// * `public` - Visibility of the new playlist
///
/// # Failure
///
/// Each step is tagged with what was being done when it failed. The new
/// playlist is kept when a later step fails.
pub async fn fork(
    api: &dyn SpotifyApi,
    token: &str,
    source_playlist: &str,
    source_owner: &str,
    target_user: &str,
    public: bool,
) -> Result<ForkOutcome> {
    let original = api
        .get_playlist(token, source_owner, source_playlist)
        .await
        .map_err(|e| e.during("getting the original playlist"))?;

    let name = format!("Fork of {}", original.name);
    let created = api
        .create_playlist(token, target_user, &name, public)
        .await
        .map_err(|e| e.during("creating the new playlist"))?;

    let mut aggregated = AggregateResult::default();
    append_playlist(api, token, &original, &mut aggregated)
        .await
        .map_err(|e| e.during("copying the songs from the original"))?;

    let tracks_written = write_tracks(api, token, &aggregated.tracks, &created.id, target_user)
        .await
        .map_err(|e| e.during("adding tracks to the new playlist"))?;

    success!("Forked {} into {} ({} tracks)", source_playlist, name, tracks_written);

    Ok(ForkOutcome {
        playlist_id: created.id,
        name,
        tracks_written,
    })
}
