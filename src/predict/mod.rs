//! # Predictive Search
//!
//! Autocomplete for the playlist fields of the fork and merge forms.
//!
//! Two modes are supported:
//!
//! - **Author mode** (`author` is a single user id): the author's playlists are
//!   listed and kept when the author owns them and their name is at least 80%
//!   similar to `name` (Levenshtein distance, case-insensitive).
//! - **Free-text mode** (anything else): Spotify's playlist search is queried
//!   and a result is kept when its name contains every term of `name`.
//!
//! Owner display names are resolved once per distinct owner, concurrently.
//! Results keep the order of the remote listing.

use std::collections::HashMap;

use futures_util::future::try_join_all;

use crate::{
    error::Result,
    spotify::{PLAYLIST_PAGE_SIZE, SpotifyApi},
    types::{PredictionMatch, Predictions, SimplifiedPlaylist},
};

mod matching;

pub use matching::{contains_all_terms, is_author_search, is_similar, similarity_threshold};

/// Finds playlists whose names approximately match `name`.
///
/// # Arguments
///
/// * `api` - Spotify API implementation
/// * `token` - Access token of the acting user
/// * `name` - Partial playlist name typed by the user
/// * `author` - Optional owner id; a single token switches to author mode
/// * `offset` - Offset into the remote listing, in steps of [`PLAYLIST_PAGE_SIZE`]
///
/// # Returns
///
/// The matches in remote order and whether the remote listing has another
/// page. An empty `name` yields no matches without contacting Spotify.
pub async fn predict(
    api: &dyn SpotifyApi,
    token: &str,
    name: &str,
    author: &str,
    offset: usize,
) -> Result<Predictions> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(Predictions::default());
    }

    let (candidates, has_more) = if is_author_search(author) {
        let author = author.trim();
        let page = api
            .user_playlists(token, author, offset, PLAYLIST_PAGE_SIZE)
            .await?;
        let has_more = page.next.is_some();
        // the listing includes playlists the author only follows
        let kept: Vec<SimplifiedPlaylist> = page
            .items
            .into_iter()
            .flatten()
            .filter(|p| p.owner.id == author && is_similar(&p.name, name))
            .collect();
        (kept, has_more)
    } else {
        let page = api
            .search_playlists(token, name, offset, PLAYLIST_PAGE_SIZE)
            .await?;
        let has_more = page.next.is_some();
        let kept: Vec<SimplifiedPlaylist> = page
            .items
            .into_iter()
            .flatten()
            .filter(|p| contains_all_terms(&p.name, name))
            .collect();
        (kept, has_more)
    };

    let display_names = resolve_owners(api, token, &candidates).await?;

    let matches = candidates
        .into_iter()
        .map(|p| {
            let owner_display_name = display_names
                .get(&p.owner.id)
                .cloned()
                .unwrap_or_else(|| p.owner.id.clone());
            PredictionMatch {
                playlist_id: p.id,
                name: p.name,
                owner_id: p.owner.id,
                owner_display_name,
            }
        })
        .collect();

    Ok(Predictions { matches, has_more })
}

async fn resolve_owners(
    api: &dyn SpotifyApi,
    token: &str,
    candidates: &[SimplifiedPlaylist],
) -> Result<HashMap<String, String>> {
    let mut owners: Vec<&str> = Vec::new();
    for candidate in candidates {
        if !owners.contains(&candidate.owner.id.as_str()) {
            owners.push(&candidate.owner.id);
        }
    }

    let profiles = try_join_all(owners.iter().map(|id| api.get_user(token, id))).await?;

    Ok(owners
        .into_iter()
        .zip(profiles)
        .map(|(id, profile)| (id.to_string(), profile.label().to_string()))
        .collect())
}
