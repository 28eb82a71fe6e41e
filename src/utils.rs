use rand::{Rng, distr::Alphanumeric};
use url::Url;

use crate::types::PlaylistRef;

/// Random value for the OAuth `state` parameter.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Extracts a playlist id from a bare id, a `spotify:playlist:<id>` URI or an
/// `open.spotify.com/playlist/<id>` URL.
///
/// Returns `None` for empty input or URLs/URIs that do not point to a playlist.
pub fn parse_playlist_id(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Some(rest) = input.strip_prefix("spotify:") {
        // spotify:playlist:<id> and the legacy spotify:user:<owner>:playlist:<id>
        let parts: Vec<&str> = rest.split(':').collect();
        return match parts.as_slice() {
            ["playlist", id] | ["user", _, "playlist", id] if !id.is_empty() => Some(id.to_string()),
            _ => None,
        };
    }

    if input.starts_with("http://") || input.starts_with("https://") {
        let url = Url::parse(input).ok()?;
        let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();
        let position = segments.iter().position(|s| *s == "playlist")?;
        return segments.get(position + 1).map(|id| id.to_string());
    }

    Some(input.to_string())
}

/// Parses a `PLAYLIST:OWNER` pair as given on the command line.
///
/// The playlist part accepts everything [`parse_playlist_id`] does, so the
/// owner is taken from the last `:`.
pub fn parse_source(input: &str) -> Result<PlaylistRef, String> {
    let (playlist, owner) = input
        .rsplit_once(':')
        .ok_or_else(|| format!("expected PLAYLIST:OWNER, got '{input}'"))?;

    let owner = owner.trim();
    if owner.is_empty() {
        return Err(format!("missing owner in '{input}'"));
    }

    let playlist_id =
        parse_playlist_id(playlist).ok_or_else(|| format!("invalid playlist in '{input}'"))?;

    Ok(PlaylistRef::new(playlist_id, owner))
}

/// Escapes text for inclusion in HTML.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
