//! # Pipeline Module
//!
//! The paginated collection and batched enrichment pipeline that turns a
//! playlist identifier into a flat dataset of track and audio-feature records.
//!
//! ```text
//! playlist id
//!     ↓
//! collect        (every page, in order, fatal on error)
//!     ↓
//! track ids      (nulls and empty ids dropped)
//!     ↓
//! enrich         (batches of ≤100, a failed batch is skipped)
//!     ↓
//! feature records
//! ```
//!
//! Both stages work on plain async closures so they can be driven by any
//! [`SpotifyApi`] implementation or by hand-written fakes in tests. Every
//! remote call is awaited before the next one starts.

mod collector;
mod enricher;

pub use collector::collect;
pub use enricher::{DEFAULT_BATCH_SIZE, MAX_BATCH_SIZE, enrich};

use crate::{
    Res,
    spotify::SpotifyApi,
    types::{Enrichment, FeatureRecord, PlaylistItem},
    utils,
};

/// Fetches every item of a playlist, following `next` cursors to the end.
pub async fn playlist_tracks<C>(api: &C, playlist_id: &str, limit: u32) -> Res<Vec<PlaylistItem>>
where
    C: SpotifyApi + ?Sized,
{
    collect(
        api.playlist_items(playlist_id, limit),
        async |previous| api.next_page(previous).await,
    )
    .await
}

/// Fetches audio features for the tracks of `items`, in item order.
pub async fn playlist_features<C>(
    api: &C,
    items: &[PlaylistItem],
    batch_size: usize,
) -> Enrichment<FeatureRecord>
where
    C: SpotifyApi + ?Sized,
{
    let ids = utils::track_ids(items);
    enrich(&ids, batch_size, async |batch| api.audio_features(batch).await).await
}
