use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr};

use crate::{Res, api, info};

pub fn router(state: api::AppState) -> Router {
    Router::new()
        .route("/", get(api::index).post(api::submit))
        .route("/callback", get(api::callback))
        .route("/success", get(api::success))
        .route("/error", get(api::error))
        .route("/predict", post(api::predictions))
        .route("/health", get(api::health))
        .layer(Extension(state))
}

pub async fn start_api_server(addr: &str, state: api::AppState) -> Res<()> {
    let addr = SocketAddr::from_str(addr)
        .map_err(|e| format!("Failed to parse server address {addr}: {e}"))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
