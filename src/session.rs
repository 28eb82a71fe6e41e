use axum::http::{HeaderMap, header::COOKIE};

/// Cookie carrying the user's access token.
pub const ACCESS_TOKEN_COOKIE: &str = "spotifork_token";

/// Cookie carrying the OAuth `state` between `/` and `/callback`.
pub const STATE_COOKIE: &str = "spotifork_state";

/// Lifetime of the state cookie in seconds.
pub const STATE_MAX_AGE: u64 = 600;

/// Cookie keeping a form submitted before sign-in, so it can be restored afterwards.
pub const PENDING_FORM_COOKIE: &str = "spotifork_pending";

/// Value of cookie `name` from the request's `Cookie` headers.
pub fn cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}

/// Access token of the current request, if the user is signed in.
pub fn access_token(headers: &HeaderMap) -> Option<String> {
    cookie(headers, ACCESS_TOKEN_COOKIE)
}

/// `Set-Cookie` value for an HTTP-only cookie expiring after `max_age` seconds.
pub fn set_cookie(name: &str, value: &str, max_age: u64) -> String {
    format!("{name}={value}; Max-Age={max_age}; Path=/; HttpOnly; SameSite=Lax")
}

/// `Set-Cookie` value removing cookie `name`.
pub fn clear_cookie(name: &str) -> String {
    format!("{name}=; Max-Age=0; Path=/; HttpOnly; SameSite=Lax")
}
