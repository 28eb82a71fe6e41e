//! # API Module
//!
//! HTTP endpoints of the Spotifork web front end. The handlers are thin: they
//! read the session cookie, parse the request into an explicit schema, call
//! the playlist engines or the predictive search, and translate the outcome
//! into a redirect, an HTML page or JSON.
//!
//! ## Endpoints
//!
//! - [`index`] - `GET /`, the form, or the Spotify authorization when no session exists
//! - [`callback`] - `GET /callback`, exchanges the authorization code and stores the session
//! - [`submit`] - `POST /`, runs a fork or merge ([`ActionRequest`])
//! - [`success`] / [`error`] - `GET /success`, `GET /error`
//! - [`predictions`] - `POST /predict`, autocomplete suggestions as JSON
//! - [`health`] - `GET /health`, status and version
//!
//! ## Errors
//!
//! Every failure is shown to the user through its message only. Form and
//! engine failures redirect to `/error?err=<message>`; `/predict` answers
//! with `{"error": <message>}`.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Extension, Router, routing::get};
//! use spotifork::api::{AppState, callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health))
//!     .layer(Extension(AppState::new(api)));
//! ```

use std::{fmt::Display, sync::Arc};

use axum::response::Redirect;

use crate::spotify::SpotifyApi;

mod callback;
mod forms;
mod health;
mod index;
mod outcome;
mod pages;
mod predict;

pub use callback::callback;
pub use forms::{ActionRequest, ForkRequest, MergeRequest, PredictForm, PredictResponse};
pub use health::health;
pub use index::{index, submit};
pub use outcome::{error, success};
pub use predict::predictions;

/// Shared state of the HTTP handlers.
///
/// Holds only the Spotify API implementation; user credentials travel with
/// each request in the session cookie.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn SpotifyApi>,
}

impl AppState {
    pub fn new(api: Arc<dyn SpotifyApi>) -> Self {
        Self { api }
    }
}

fn error_redirect(err: &impl Display) -> Redirect {
    Redirect::to(&format!(
        "/error?err={}",
        urlencoding::encode(&err.to_string())
    ))
}
