use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::Client;

use crate::{
    config::AppConfig,
    error::Result,
    types::{Credential, TokenResponse},
};

/// Builds the Spotify authorization URL for the authorization code flow.
///
/// # Arguments
///
/// * `config` - Application configuration holding client id, redirect URI and scope
/// * `state` - Opaque value echoed back to the callback, checked against the session
///
/// # Example
///
/// ```
/// let url = authorize_url(&config, "x1y2z3");
/// // https://accounts.spotify.com/authorize?client_id=...&response_type=code&...
/// ```
pub fn authorize_url(config: &AppConfig, state: &str) -> String {
    format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}&state={state}",
        auth_url = config.auth_url,
        client_id = urlencoding::encode(&config.client_id),
        redirect_uri = urlencoding::encode(&config.redirect_uri),
        scope = urlencoding::encode(&config.scope),
        state = urlencoding::encode(state),
    )
}

/// Value of the `Authorization` header for the token endpoint.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{client_id}:{client_secret}");
    format!("Basic {}", STANDARD.encode(credentials))
}

/// Exchanges an authorization code for an access and refresh token.
///
/// Uses the client secret (Basic authentication) rather than PKCE since the
/// exchange always happens on the server.
pub async fn exchange_code(http: &Client, config: &AppConfig, code: &str) -> Result<Credential> {
    let res = http
        .post(&config.token_url)
        .header(
            reqwest::header::AUTHORIZATION,
            basic_auth_header(&config.client_id, &config.client_secret),
        )
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
        ])
        .send()
        .await?;

    let res = super::client::check_status(res).await?;
    let token = res.json::<TokenResponse>().await?;

    Ok(into_credential(token))
}

fn into_credential(token: TokenResponse) -> Credential {
    Credential {
        access_token: token.access_token,
        refresh_token: token.refresh_token.unwrap_or_default(),
        scope: token.scope.unwrap_or_default(),
        expires_in: token.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    }
}
