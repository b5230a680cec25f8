use std::path::{Path, PathBuf};

use tabled::Table;

use crate::{
    config::Config,
    error, info, management, pipeline,
    spotify::SpotifyClient,
    success,
    types::BatchTableRow,
    warning,
};

use super::tracks::fetch_tracks;

pub async fn extract_features(
    config: &Config,
    playlist: Option<String>,
    output: &Path,
    limit: u32,
    batch_size: usize,
    tracks_output: Option<PathBuf>,
) {
    let playlist_id = match config.playlist(playlist) {
        Ok(id) => id,
        Err(e) => error!("{}", e),
    };

    let client = match SpotifyClient::connect(config).await {
        Ok(client) => client,
        Err(e) => error!("{}", e),
    };

    let tracks = fetch_tracks(&client, &playlist_id, limit).await;

    if let Some(path) = tracks_output {
        if let Err(e) = management::write_json(&path, &tracks).await {
            error!("Failed to write {}: {}", path.display(), e);
        }
        success!("Saved tracks to {}", path.display());
    }

    info!("Fetching audio features for {} tracks", tracks.len());
    let enrichment = pipeline::playlist_features(&client, &tracks, batch_size).await;

    if !enrichment.batches.is_empty() {
        let rows: Vec<BatchTableRow> = enrichment.batches.iter().map(BatchTableRow::from).collect();
        println!("{}", Table::new(rows));
    }

    let failed = enrichment.failed_batches().count();
    if failed > 0 {
        warning!(
            "{} of {} batches failed, their tracks have no features",
            failed,
            enrichment.batches.len()
        );
    }

    if let Err(e) = management::write_csv(output, &enrichment.records).await {
        error!("Failed to write {}: {}", output.display(), e);
    }
    success!(
        "Saved {} feature records to {}",
        enrichment.records.len(),
        output.display()
    );
}
