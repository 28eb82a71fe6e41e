use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::{
    error::{Result, SpotiforkError},
    types::{PlaylistRef, PredictionMatch},
    utils,
};

/// Copy one playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForkRequest {
    pub source: PlaylistRef,
    pub public: bool,
}

/// Combine several playlists, in the order given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequest {
    pub sources: Vec<PlaylistRef>,
    pub public: bool,
}

/// A submission of the fork/merge form.
///
/// The form is urlencoded with these fields:
///
/// - `action` - `fork` or `merge`
/// - `playlist` / `owner` - repeated in pairs, in source order; exactly one
///   pair for a fork, one or more for a merge
/// - `public` - present (`on`, `true` or `1`) for a public playlist
///
/// Rows where both playlist and owner are blank are ignored, so the merge
/// form can keep an empty row at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionRequest {
    Fork(ForkRequest),
    Merge(MergeRequest),
}

impl ActionRequest {
    pub fn from_form(body: &[u8]) -> Result<Self> {
        let mut action = None;
        let mut playlists = Vec::new();
        let mut owners = Vec::new();
        let mut public = false;

        for (key, value) in form_urlencoded::parse(body) {
            match key.as_ref() {
                "action" => action = Some(value.trim().to_lowercase()),
                "playlist" => playlists.push(value.into_owned()),
                "owner" => owners.push(value.into_owned()),
                "public" => public = matches!(value.as_ref(), "on" | "true" | "1"),
                _ => {}
            }
        }

        if playlists.len() != owners.len() {
            return Err(SpotiforkError::invalid_input(
                "every playlist needs an owner",
            ));
        }

        let sources = playlists
            .iter()
            .zip(owners.iter())
            .filter(|(playlist, owner)| !(playlist.trim().is_empty() && owner.trim().is_empty()))
            .map(|(playlist, owner)| {
                let playlist_id = utils::parse_playlist_id(playlist).ok_or_else(|| {
                    SpotiforkError::invalid_input("You need a playlist ID!")
                })?;
                let owner = owner.trim();
                if owner.is_empty() {
                    return Err(SpotiforkError::invalid_input(
                        "The playlist's owner is required.",
                    ));
                }
                Ok(PlaylistRef::new(playlist_id, owner))
            })
            .collect::<Result<Vec<_>>>()?;

        match action.as_deref() {
            Some("fork") => {
                let mut sources = sources.into_iter();
                match (sources.next(), sources.next()) {
                    (Some(source), None) => Ok(Self::Fork(ForkRequest { source, public })),
                    (None, _) => Err(SpotiforkError::invalid_input("You need a playlist ID!")),
                    (Some(_), Some(_)) => Err(SpotiforkError::invalid_input(
                        "a fork takes exactly one playlist",
                    )),
                }
            }
            Some("merge") if sources.is_empty() => Err(SpotiforkError::invalid_input(
                "You need at least one playlist ID for merging!",
            )),
            Some("merge") => Ok(Self::Merge(MergeRequest { sources, public })),
            Some(other) => Err(SpotiforkError::invalid_input(format!(
                "unknown action '{other}'"
            ))),
            None => Err(SpotiforkError::invalid_input("missing action")),
        }
    }

    pub fn action_name(&self) -> &'static str {
        match self {
            Self::Fork(_) => "fork",
            Self::Merge(_) => "merge",
        }
    }

    pub fn sources(&self) -> &[PlaylistRef] {
        match self {
            Self::Fork(fork) => std::slice::from_ref(&fork.source),
            Self::Merge(merge) => &merge.sources,
        }
    }

    pub fn public(&self) -> bool {
        match self {
            Self::Fork(fork) => fork.public,
            Self::Merge(merge) => merge.public,
        }
    }
}

/// Form posted by the autocomplete box.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub author: String,
    // browsers send an empty string for a blank field
    #[serde(default)]
    pub offset: Option<String>,
}

impl PredictForm {
    pub fn offset(&self) -> usize {
        self.offset
            .as_deref()
            .and_then(|o| o.trim().parse().ok())
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub matches: Vec<PredictionMatch>,
    /// Offset of the next page, if there is one.
    pub next: Option<usize>,
}
