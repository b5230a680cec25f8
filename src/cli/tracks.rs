use std::path::Path;

use crate::{
    config::Config,
    error, info, management, pipeline,
    spotify::SpotifyClient,
    success,
    types::PlaylistItem,
    utils,
};

pub async fn download_tracks(config: &Config, playlist: Option<String>, output: &Path, limit: u32) {
    let playlist_id = match config.playlist(playlist) {
        Ok(id) => id,
        Err(e) => error!("{}", e),
    };

    let client = match SpotifyClient::connect(config).await {
        Ok(client) => client,
        Err(e) => error!("{}", e),
    };

    let tracks = fetch_tracks(&client, &playlist_id, limit).await;

    if let Err(e) = management::write_json(output, &tracks).await {
        error!("Failed to write {}: {}", output.display(), e);
    }
    success!("Saved to {}", output.display());
}

pub(crate) async fn fetch_tracks(
    client: &SpotifyClient,
    playlist_id: &str,
    limit: u32,
) -> Vec<PlaylistItem> {
    info!("Fetching tracks from playlist: {}", playlist_id);

    let pb = utils::spinner("Fetching playlist pages...");
    let result = pipeline::playlist_tracks(client, playlist_id, limit).await;
    pb.finish_and_clear();

    match result {
        Ok(tracks) => {
            success!("Retrieved {} tracks", tracks.len());
            tracks
        }
        Err(e) => error!("Failed to fetch playlist {}: {}", playlist_id, e),
    }
}
