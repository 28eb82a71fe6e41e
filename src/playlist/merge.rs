use crate::{
    error::{Result, SpotiforkError},
    spotify::SpotifyApi,
    success,
    types::{ForkOutcome, PlaylistRef},
};

use super::{aggregate, write_tracks};

/// Name of a merge playlist until all sources have been read.
pub const MERGE_PLACEHOLDER_NAME: &str = "temp";

/// Combines `sources` into one new playlist owned by `merger`.
///
/// The playlist is created as [`MERGE_PLACEHOLDER_NAME`], filled with the
/// deduplicated tracks of all sources and only then renamed to
/// `"Merge of A & B & ..."`, since the combined name is known once every
/// source has been read. When reading or writing fails the rename is not
/// attempted and the placeholder name stays.
///
/// A single source behaves like [`fork`](super::fork) with a different name.
pub async fn merge(
    api: &dyn SpotifyApi,
    token: &str,
    sources: &[PlaylistRef],
    merger: &str,
    public: bool,
) -> Result<ForkOutcome> {
    if sources.is_empty() {
        return Err(SpotiforkError::invalid_input(
            "at least one playlist is needed for merging",
        ));
    }

    let created = api
        .create_playlist(token, merger, MERGE_PLACEHOLDER_NAME, public)
        .await
        .map_err(|e| e.during("creating the new playlist"))?;

    let aggregated = aggregate(api, token, sources)
        .await
        .map_err(|e| e.during("processing the playlists"))?;

    let tracks_written = write_tracks(api, token, &aggregated.tracks, &created.id, merger)
        .await
        .map_err(|e| e.during("adding tracks to the new playlist"))?;

    let name = format!("Merge of {}", aggregated.combined_name);
    api.change_playlist_details(token, &created.id, &name, public)
        .await
        .map_err(|e| e.during("updating the new playlist name"))?;

    success!("Merged {} playlists into {} ({} tracks)", sources.len(), name, tracks_written);

    Ok(ForkOutcome {
        playlist_id: created.id,
        name,
        tracks_written,
    })
}
