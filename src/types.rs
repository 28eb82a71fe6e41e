use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// OAuth credential for one authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// A source playlist together with the user expected to own it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistRef {
    pub playlist_id: String,
    pub owner_id: String,
}

impl PlaylistRef {
    pub fn new(playlist_id: impl Into<String>, owner_id: impl Into<String>) -> Self {
        Self {
            playlist_id: playlist_id.into(),
            owner_id: owner_id.into(),
        }
    }
}

/// Track URI in the form `spotify:track:<id>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackRef(String);

impl TrackRef {
    pub fn from_track_id(id: &str) -> Self {
        Self(format!("spotify:track:{id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TrackRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered list of tracks that never holds the same track twice.
#[derive(Debug, Clone, Default)]
pub struct TrackList {
    tracks: Vec<TrackRef>,
    seen: HashSet<TrackRef>,
}

impl TrackList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the track unless it is already present. Returns whether it was added.
    pub fn push(&mut self, track: TrackRef) -> bool {
        if !self.seen.insert(track.clone()) {
            return false;
        }
        self.tracks.push(track);
        true
    }

    pub fn contains(&self, track: &TrackRef) -> bool {
        self.seen.contains(track)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn as_slice(&self) -> &[TrackRef] {
        &self.tracks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrackRef> {
        self.tracks.iter()
    }
}

impl FromIterator<TrackRef> for TrackList {
    fn from_iter<I: IntoIterator<Item = TrackRef>>(iter: I) -> Self {
        let mut list = TrackList::new();
        for track in iter {
            list.push(track);
        }
        list
    }
}

/// Combined name and tracks of one or more source playlists.
#[derive(Debug, Clone, Default)]
pub struct AggregateResult {
    pub combined_name: String,
    pub tracks: TrackList,
}

impl AggregateResult {
    pub fn push_name(&mut self, name: &str) {
        // no separator before the first playlist name
        if !self.combined_name.is_empty() {
            self.combined_name.push_str(" & ");
        }
        self.combined_name.push_str(name);
    }
}

/// Playlist created by a fork or merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForkOutcome {
    pub playlist_id: String,
    pub name: String,
    pub tracks_written: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionMatch {
    pub playlist_id: String,
    pub name: String,
    pub owner_id: String,
    pub owner_display_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predictions {
    pub matches: Vec<PredictionMatch>,
    pub has_more: bool,
}

#[derive(Tabled)]
pub struct PredictionTableRow {
    pub name: String,
    pub owner: String,
    pub playlist: String,
}

// Spotify Web API payloads

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl UserProfile {
    /// The display name, or the user id when none is set.
    pub fn label(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackCount {
    pub total: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub owner: PlaylistOwner,
    pub tracks: TrackCount,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksPage {
    pub items: Vec<PlaylistItem>,
    pub total: u32,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    #[serde(default)]
    pub track: Option<TrackObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplifiedPlaylist {
    pub id: String,
    pub name: String,
    pub owner: PlaylistOwner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistPage {
    // search results may contain null entries
    pub items: Vec<Option<SimplifiedPlaylist>>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub total: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPlaylistsResponse {
    pub playlists: PlaylistPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
    pub owner: PlaylistOwner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePlaylistDetailsRequest {
    pub name: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<TrackRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpotifyErrorBody {
    pub error: SpotifyErrorDetail,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpotifyErrorDetail {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub message: String,
}
