use axum::{
    Extension,
    extract::RawForm,
    http::{HeaderMap, header::SET_COOKIE},
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
};

use crate::{
    error::Result,
    playlist, session,
    spotify::SpotifyApi,
    types::ForkOutcome,
    utils, warning,
};

use super::{ActionRequest, AppState, error_redirect};

/// `GET /` - the form for signed-in users, otherwise the Spotify authorization.
///
/// A form posted before sign-in is restored into the page once and its
/// cookie cleared.
pub async fn index(Extension(state): Extension<AppState>, headers: HeaderMap) -> Response {
    if session::access_token(&headers).is_some() {
        let Some(saved) = session::cookie(&headers, session::PENDING_FORM_COOKIE) else {
            return Html(super::pages::index_page(None)).into_response();
        };

        let pending = urlencoding::decode(&saved)
            .ok()
            .and_then(|body| ActionRequest::from_form(body.as_bytes()).ok());
        return (
            AppendHeaders([(SET_COOKIE, session::clear_cookie(session::PENDING_FORM_COOKIE))]),
            Html(super::pages::index_page(pending.as_ref())),
        )
            .into_response();
    }

    let oauth_state = utils::generate_state();
    let cookie = session::set_cookie(session::STATE_COOKIE, &oauth_state, session::STATE_MAX_AGE);

    (
        AppendHeaders([(SET_COOKIE, cookie)]),
        Redirect::to(&state.api.authorize_url(&oauth_state)),
    )
        .into_response()
}

/// `POST /` - run a fork or merge for the signed-in user.
///
/// Without a session a valid form is kept in a cookie and the user is sent
/// to sign in first.
pub async fn submit(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
    RawForm(body): RawForm,
) -> Response {
    let Some(token) = session::access_token(&headers) else {
        // keep the form across the sign-in; `/` starts the authorization
        if ActionRequest::from_form(&body).is_err() {
            return Redirect::to("/").into_response();
        }
        let saved = urlencoding::encode(&String::from_utf8_lossy(&body)).into_owned();
        let cookie = session::set_cookie(session::PENDING_FORM_COOKIE, &saved, session::STATE_MAX_AGE);
        return (AppendHeaders([(SET_COOKIE, cookie)]), Redirect::to("/")).into_response();
    };

    let request = match ActionRequest::from_form(&body) {
        Ok(request) => request,
        Err(e) => return error_redirect(&e).into_response(),
    };

    match run(state.api.as_ref(), &token, &request).await {
        Ok(outcome) => Redirect::to(&format!(
            "/success?action={}&name={}",
            request.action_name(),
            urlencoding::encode(&outcome.name)
        ))
        .into_response(),
        Err(e) => {
            warning!("{} failed: {}", request.action_name(), e);
            error_redirect(&e).into_response()
        }
    }
}

async fn run(api: &dyn SpotifyApi, token: &str, request: &ActionRequest) -> Result<ForkOutcome> {
    let me = api
        .current_user(token)
        .await
        .map_err(|e| e.during("getting user information"))?;

    match request {
        ActionRequest::Fork(fork) => {
            playlist::fork(
                api,
                token,
                &fork.source.playlist_id,
                &fork.source.owner_id,
                &me.id,
                fork.public,
            )
            .await
        }
        ActionRequest::Merge(merge) => {
            playlist::merge(api, token, &merge.sources, &me.id, merge.public).await
        }
    }
}
