use colored::Colorize;
use tabled::{Table, settings::Style};

use crate::{
    config::AppConfig,
    error, info,
    predict as search,
    spotify::{PLAYLIST_PAGE_SIZE, SpotifyClient},
    types::PredictionTableRow,
};

pub async fn predict(config: AppConfig, token: String, name: String, author: Option<String>, offset: usize) {
    let client = SpotifyClient::new(config);
    let author = author.unwrap_or_default();

    let predictions = match search::predict(&client, &token, &name, &author, offset).await {
        Ok(p) => p,
        Err(e) => error!("Search failed: {}", e),
    };

    if predictions.matches.is_empty() {
        info!("No playlists match '{}'", name);
    } else {
        let rows: Vec<PredictionTableRow> = predictions
            .matches
            .into_iter()
            .map(|m| PredictionTableRow {
                name: m.name,
                owner: format!("{} ({})", m.owner_display_name, m.owner_id),
                playlist: m.playlist_id,
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
    }

    if predictions.has_more {
        info!(
            "More results available, use {}",
            format!("--offset {}", offset + PLAYLIST_PAGE_SIZE).bold()
        );
    }
}
