use crate::{
    error::Result,
    info,
    spotify::{SpotifyApi, TRACK_PAGE_SIZE},
    types::{AggregateResult, Playlist, PlaylistRef, TrackRef},
    warning,
};

/// Collects the tracks and names of one or more playlists.
///
/// Each source is read in the order given: its name and track total first,
/// then its tracks in pages of [`TRACK_PAGE_SIZE`] until the total is reached.
/// Tracks without an id (local files uploaded by the owner) are skipped with a
/// warning. A track already collected from an earlier page or source is not
/// added again.
///
/// # Arguments
///
/// * `api` - Spotify API implementation
/// * `token` - Access token of the acting user
/// * `sources` - Playlists to read, in the order they should appear
///
/// # Returns
///
/// The names joined with `" & "` and the deduplicated track list. Any remote
/// failure aborts the aggregation and no partial result is returned.
///
/// # Example
///
/// ```
/// let sources = vec![PlaylistRef::new("pl_a", "owner_x"), PlaylistRef::new("pl_b", "owner_y")];
/// let result = aggregate(&client, token, &sources).await?;
/// assert_eq!(result.combined_name, "A & B");
/// ```
pub async fn aggregate(
    api: &dyn SpotifyApi,
    token: &str,
    sources: &[PlaylistRef],
) -> Result<AggregateResult> {
    let mut result = AggregateResult::default();

    for source in sources {
        let playlist = api
            .get_playlist(token, &source.owner_id, &source.playlist_id)
            .await?;
        append_playlist(api, token, &playlist, &mut result).await?;
    }

    Ok(result)
}

/// Adds the tracks and name of an already fetched playlist to `result`.
pub(crate) async fn append_playlist(
    api: &dyn SpotifyApi,
    token: &str,
    playlist: &Playlist,
    result: &mut AggregateResult,
) -> Result<()> {
    let total = playlist.tracks.total as usize;

    info!("Reading {} tracks from {}", total, playlist.name);

    let mut offset = 0;
    let mut skipped = 0;
    while offset < total {
        let page = api
            .get_playlist_tracks(token, &playlist.id, offset, TRACK_PAGE_SIZE)
            .await?;

        // the playlist shrank while paging
        if page.items.is_empty() {
            break;
        }
        offset += page.items.len();

        for item in page.items {
            match item.track.and_then(|t| t.id) {
                Some(id) => {
                    result.tracks.push(TrackRef::from_track_id(&id));
                }
                None => skipped += 1,
            }
        }
    }

    if skipped > 0 {
        warning!(
            "{} track(s) of {} could not be added because they were uploaded by the playlist owner",
            skipped,
            playlist.name
        );
    }

    result.push_name(&playlist.name);
    Ok(())
}
