#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use spotifork::{
    error::{Result, SpotiforkError},
    spotify::SpotifyApi,
    types::{
        CreatePlaylistResponse, Credential, Playlist, PlaylistItem, PlaylistOwner, PlaylistPage,
        PlaylistTracksPage, SimplifiedPlaylist, TrackCount, TrackObject, TrackRef, UserProfile,
    },
};

pub const TOKEN: &str = "test-token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Exchange { code: String },
    CurrentUser,
    GetUser { user_id: String },
    GetPlaylist { playlist_id: String },
    GetTracks { playlist_id: String, offset: usize, limit: usize },
    Create { owner_id: String, name: String, public: bool },
    Rename { playlist_id: String, name: String, public: bool },
    AddTracks { playlist_id: String, uris: Vec<String> },
    UserPlaylists { user_id: String, offset: usize },
    Search { query: String, offset: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    GetPlaylist(String),
    TracksAt { playlist_id: String, offset: usize },
    Create,
    /// Fails the n-th add-tracks call (1-based).
    AddTracks(usize),
    Rename,
    GetUser(String),
    Search,
    Exchange,
}

#[derive(Debug, Clone)]
pub struct FakePlaylist {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub public: bool,
    /// Track ids of a source playlist; `None` is a local file.
    pub tracks: Vec<Option<String>>,
    /// URIs appended through `add_tracks`.
    pub added: Vec<String>,
}

#[derive(Default)]
struct FakeState {
    me: String,
    playlists: Vec<FakePlaylist>,
    users: HashMap<String, Option<String>>,
    /// (user, playlist) pairs of followed playlists
    follows: Vec<(String, String)>,
    search_results: Vec<Option<SimplifiedPlaylist>>,
    search_has_next: bool,
    failures: Vec<Failure>,
    calls: Vec<Call>,
    add_calls: usize,
    created: usize,
}

/// In-memory Spotify recording every call it receives.
#[derive(Default)]
pub struct FakeSpotify {
    state: Mutex<FakeState>,
}

impl FakeSpotify {
    pub fn new(me: &str) -> Self {
        let fake = Self::default();
        fake.state.lock().unwrap().me = me.to_string();
        fake
    }

    pub fn with_playlist(self, id: &str, name: &str, owner: &str, tracks: &[Option<&str>]) -> Self {
        self.state.lock().unwrap().playlists.push(FakePlaylist {
            id: id.to_string(),
            name: name.to_string(),
            owner: owner.to_string(),
            public: false,
            tracks: tracks.iter().map(|t| t.map(str::to_string)).collect(),
            added: Vec::new(),
        });
        self
    }

    /// Source playlist with `count` distinct tracks named `<prefix>0..`.
    pub fn with_numbered_playlist(self, id: &str, name: &str, owner: &str, prefix: &str, count: usize) -> Self {
        let ids: Vec<String> = (0..count).map(|i| format!("{prefix}{i}")).collect();
        let tracks: Vec<Option<&str>> = ids.iter().map(|s| Some(s.as_str())).collect();
        self.with_playlist(id, name, owner, &tracks)
    }

    pub fn with_user(self, id: &str, display_name: Option<&str>) -> Self {
        self.state
            .lock()
            .unwrap()
            .users
            .insert(id.to_string(), display_name.map(str::to_string));
        self
    }

    /// `user` follows `playlist_id` without owning it.
    pub fn with_follow(self, user: &str, playlist_id: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .follows
            .push((user.to_string(), playlist_id.to_string()));
        self
    }

    pub fn with_search_results(self, items: Vec<Option<SimplifiedPlaylist>>, has_next: bool) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.search_results = items;
            state.search_has_next = has_next;
        }
        self
    }

    pub fn failing(self, failure: Failure) -> Self {
        self.state.lock().unwrap().failures.push(failure);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn add_track_calls(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::AddTracks { uris, .. } => Some(uris),
                _ => None,
            })
            .collect()
    }

    pub fn playlist(&self, id: &str) -> Option<FakePlaylist> {
        self.state
            .lock()
            .unwrap()
            .playlists
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    fn record(&self, call: Call) {
        self.state.lock().unwrap().calls.push(call);
    }

    fn fails(&self, failure: &Failure) -> bool {
        self.state.lock().unwrap().failures.contains(failure)
    }
}

pub fn simplified(id: &str, name: &str, owner: &str) -> SimplifiedPlaylist {
    SimplifiedPlaylist {
        id: id.to_string(),
        name: name.to_string(),
        owner: PlaylistOwner {
            id: owner.to_string(),
            display_name: None,
        },
    }
}

fn remote_error(status: u16, message: &str) -> SpotiforkError {
    SpotiforkError::Api {
        status,
        message: message.to_string(),
    }
}

#[async_trait]
impl SpotifyApi for FakeSpotify {
    fn authorize_url(&self, state: &str) -> String {
        format!("https://accounts.example.com/authorize?state={state}")
    }

    async fn exchange_code(&self, code: &str) -> Result<Credential> {
        self.record(Call::Exchange {
            code: code.to_string(),
        });
        if self.fails(&Failure::Exchange) {
            return Err(SpotiforkError::Auth("Invalid authorization code".to_string()));
        }
        Ok(Credential {
            access_token: format!("token-for-{code}"),
            refresh_token: "refresh".to_string(),
            scope: "playlist-modify-private".to_string(),
            expires_in: 3600,
            obtained_at: 0,
        })
    }

    async fn current_user(&self, _token: &str) -> Result<UserProfile> {
        self.record(Call::CurrentUser);
        let me = self.state.lock().unwrap().me.clone();
        Ok(UserProfile {
            id: me,
            display_name: None,
        })
    }

    async fn get_user(&self, _token: &str, user_id: &str) -> Result<UserProfile> {
        self.record(Call::GetUser {
            user_id: user_id.to_string(),
        });
        if self.fails(&Failure::GetUser(user_id.to_string())) {
            return Err(remote_error(500, "user lookup failed"));
        }
        let state = self.state.lock().unwrap();
        match state.users.get(user_id) {
            Some(display_name) => Ok(UserProfile {
                id: user_id.to_string(),
                display_name: display_name.clone(),
            }),
            None => Err(SpotiforkError::not_found("User", user_id)),
        }
    }

    async fn get_playlist(&self, _token: &str, owner_id: &str, playlist_id: &str) -> Result<Playlist> {
        self.record(Call::GetPlaylist {
            playlist_id: playlist_id.to_string(),
        });
        if self.fails(&Failure::GetPlaylist(playlist_id.to_string())) {
            return Err(remote_error(500, "playlist lookup failed"));
        }
        let playlist = self
            .playlist(playlist_id)
            .filter(|p| p.owner == owner_id)
            .ok_or_else(|| SpotiforkError::not_found("Playlist", playlist_id))?;

        Ok(Playlist {
            id: playlist.id,
            name: playlist.name,
            owner: PlaylistOwner {
                id: playlist.owner,
                display_name: None,
            },
            tracks: TrackCount {
                total: playlist.tracks.len() as u32,
            },
        })
    }

    async fn get_playlist_tracks(
        &self,
        _token: &str,
        playlist_id: &str,
        offset: usize,
        limit: usize,
    ) -> Result<PlaylistTracksPage> {
        self.record(Call::GetTracks {
            playlist_id: playlist_id.to_string(),
            offset,
            limit,
        });
        if self.fails(&Failure::TracksAt {
            playlist_id: playlist_id.to_string(),
            offset,
        }) {
            return Err(remote_error(502, "Bad gateway"));
        }
        let playlist = self
            .playlist(playlist_id)
            .ok_or_else(|| SpotiforkError::not_found("Playlist", playlist_id))?;

        let total = playlist.tracks.len();
        let end = (offset + limit).min(total);
        let items = playlist.tracks[offset.min(total)..end]
            .iter()
            .map(|id| PlaylistItem {
                track: Some(TrackObject { id: id.clone() }),
            })
            .collect();

        Ok(PlaylistTracksPage {
            items,
            total: total as u32,
            next: (end < total).then(|| format!("offset={end}")),
        })
    }

    async fn create_playlist(
        &self,
        _token: &str,
        owner_id: &str,
        name: &str,
        public: bool,
    ) -> Result<CreatePlaylistResponse> {
        self.record(Call::Create {
            owner_id: owner_id.to_string(),
            name: name.to_string(),
            public,
        });
        if self.fails(&Failure::Create) {
            return Err(remote_error(403, "Insufficient client scope"));
        }
        let mut state = self.state.lock().unwrap();
        state.created += 1;
        let id = format!("created-{}", state.created);
        state.playlists.push(FakePlaylist {
            id: id.clone(),
            name: name.to_string(),
            owner: owner_id.to_string(),
            public,
            tracks: Vec::new(),
            added: Vec::new(),
        });

        Ok(CreatePlaylistResponse {
            id,
            name: name.to_string(),
            owner: PlaylistOwner {
                id: owner_id.to_string(),
                display_name: None,
            },
        })
    }

    async fn change_playlist_details(
        &self,
        _token: &str,
        playlist_id: &str,
        name: &str,
        public: bool,
    ) -> Result<()> {
        self.record(Call::Rename {
            playlist_id: playlist_id.to_string(),
            name: name.to_string(),
            public,
        });
        if self.fails(&Failure::Rename) {
            return Err(remote_error(500, "rename failed"));
        }
        let mut state = self.state.lock().unwrap();
        let playlist = state
            .playlists
            .iter_mut()
            .find(|p| p.id == playlist_id)
            .ok_or_else(|| SpotiforkError::not_found("Playlist", playlist_id))?;
        playlist.name = name.to_string();
        playlist.public = public;
        Ok(())
    }

    async fn add_tracks(&self, _token: &str, playlist_id: &str, uris: &[TrackRef]) -> Result<()> {
        let uris: Vec<String> = uris.iter().map(|u| u.as_str().to_string()).collect();
        self.record(Call::AddTracks {
            playlist_id: playlist_id.to_string(),
            uris: uris.clone(),
        });

        let nth = {
            let mut state = self.state.lock().unwrap();
            state.add_calls += 1;
            state.add_calls
        };
        if self.fails(&Failure::AddTracks(nth)) {
            return Err(remote_error(500, "add tracks failed"));
        }

        let mut state = self.state.lock().unwrap();
        let playlist = state
            .playlists
            .iter_mut()
            .find(|p| p.id == playlist_id)
            .ok_or_else(|| SpotiforkError::not_found("Playlist", playlist_id))?;
        playlist.added.extend(uris);
        Ok(())
    }

    async fn user_playlists(
        &self,
        _token: &str,
        user_id: &str,
        offset: usize,
        limit: usize,
    ) -> Result<PlaylistPage> {
        self.record(Call::UserPlaylists {
            user_id: user_id.to_string(),
            offset,
        });
        let state = self.state.lock().unwrap();
        // like Spotify, the listing holds owned and followed playlists
        let listed: Vec<&FakePlaylist> = state
            .playlists
            .iter()
            .filter(|p| {
                p.owner == user_id
                    || state
                        .follows
                        .iter()
                        .any(|(user, id)| user == user_id && *id == p.id)
            })
            .collect();
        let end = (offset + limit).min(listed.len());
        let items = listed[offset.min(end)..end]
            .iter()
            .map(|p| Some(simplified(&p.id, &p.name, &p.owner)))
            .collect();

        Ok(PlaylistPage {
            items,
            next: (end < listed.len()).then(|| format!("offset={end}")),
            total: listed.len() as u32,
        })
    }

    async fn search_playlists(
        &self,
        _token: &str,
        query: &str,
        offset: usize,
        _limit: usize,
    ) -> Result<PlaylistPage> {
        self.record(Call::Search {
            query: query.to_string(),
            offset,
        });
        if self.fails(&Failure::Search) {
            return Err(remote_error(503, "Service unavailable"));
        }
        let state = self.state.lock().unwrap();
        Ok(PlaylistPage {
            items: state.search_results.clone(),
            next: state.search_has_next.then(|| "next".to_string()),
            total: state.search_results.len() as u32,
        })
    }
}
