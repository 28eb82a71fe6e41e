use crate::{
    error::{Result, SpotiforkError},
    spotify::{SpotifyApi, TRACK_PAGE_SIZE},
    types::TrackList,
};

/// Appends `tracks` to a playlist in chunks of at most [`TRACK_PAGE_SIZE`].
///
/// Chunks are sent strictly in order and writing stops at the first failing
/// chunk. If earlier chunks were already appended the error is a
/// [`SpotiforkError::PartialWrite`]; those tracks stay in the playlist.
///
/// Returns the number of tracks written.
pub async fn write_tracks(
    api: &dyn SpotifyApi,
    token: &str,
    tracks: &TrackList,
    target_playlist: &str,
    target_owner: &str,
) -> Result<usize> {
    let total = tracks.len();
    let mut written = 0;

    for chunk in tracks.as_slice().chunks(TRACK_PAGE_SIZE) {
        if let Err(e) = api.add_tracks(token, target_playlist, chunk).await {
            if written == 0 {
                return Err(e);
            }
            return Err(SpotiforkError::PartialWrite {
                written,
                total,
                source: Box::new(e),
            });
        }
        written += chunk.len();
    }

    crate::info!(
        "Added {} tracks to {} owned by {}",
        written,
        target_playlist,
        target_owner
    );
    Ok(written)
}
