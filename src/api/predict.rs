use axum::{
    Extension, Form, Json,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{predict, session, spotify::PLAYLIST_PAGE_SIZE, warning};

use super::{AppState, PredictForm, PredictResponse};

/// `POST /predict` - playlist suggestions as `{matches, next}`.
pub async fn predictions(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
    Form(form): Form<PredictForm>,
) -> Response {
    let Some(token) = session::access_token(&headers) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Not signed in to Spotify." })),
        )
            .into_response();
    };

    let offset = form.offset();
    match predict::predict(state.api.as_ref(), &token, &form.name, &form.author, offset).await {
        Ok(predictions) => Json(PredictResponse {
            matches: predictions.matches,
            next: predictions.has_more.then_some(offset + PLAYLIST_PAGE_SIZE),
        })
        .into_response(),
        Err(e) => {
            warning!("Prediction for '{}' failed: {}", form.name, e);
            (StatusCode::BAD_GATEWAY, Json(json!({ "error": e.to_string() }))).into_response()
        }
    }
}
