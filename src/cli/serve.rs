use std::sync::Arc;

use crate::{
    api::AppState,
    config::AppConfig,
    error, server,
    spotify::SpotifyClient,
    warning,
};

pub async fn serve(config: AppConfig, open: bool) {
    let addr = config.server_addr.clone();
    let state = AppState::new(Arc::new(SpotifyClient::new(config)));

    if open {
        let url = format!("http://{addr}/");
        if webbrowser::open(&url).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                url
            )
        }
    }

    if let Err(e) = server::start_api_server(&addr, state).await {
        error!("Server stopped: {}", e);
    }
}
