use std::collections::HashMap;

use axum::{
    Extension,
    extract::Query,
    http::{HeaderMap, header::SET_COOKIE},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};

use crate::{session, warning};

use super::{AppState, error_redirect};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
) -> Response {
    let clear_state = AppendHeaders([(SET_COOKIE, session::clear_cookie(session::STATE_COOKIE))]);

    if let Some(err) = params.get("error") {
        return (clear_state, error_redirect(&format!("Authorization was denied: {err}"))).into_response();
    }

    let expected = session::cookie(&headers, session::STATE_COOKIE);
    if expected.is_none() || params.get("state") != expected.as_ref() {
        return (clear_state, error_redirect(&"Authorization state mismatch, please try again."))
            .into_response();
    }

    let Some(code) = params.get("code") else {
        return (clear_state, error_redirect(&"Missing authorization code.")).into_response();
    };

    match state.api.exchange_code(code).await {
        Ok(credential) => {
            let token_cookie = session::set_cookie(
                session::ACCESS_TOKEN_COOKIE,
                &credential.access_token,
                credential.expires_in,
            );
            (
                AppendHeaders([
                    (SET_COOKIE, token_cookie),
                    (SET_COOKIE, session::clear_cookie(session::STATE_COOKIE)),
                ]),
                Redirect::to("/"),
            )
                .into_response()
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            (clear_state, error_redirect(&e)).into_response()
        }
    }
}
