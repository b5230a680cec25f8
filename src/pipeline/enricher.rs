use crate::{
    Res, info, success,
    types::{BatchReport, Enrichment},
    warning,
};

/// Per-request id limit of the audio-features endpoint.
pub const MAX_BATCH_SIZE: usize = 100;
pub const DEFAULT_BATCH_SIZE: usize = MAX_BATCH_SIZE;

/// Fetches records for `ids` in contiguous batches and concatenates them.
///
/// `None` and empty ids are dropped before batching and never reach
/// `fetch_batch`. `batch_size` is clamped to `1..=MAX_BATCH_SIZE`.
///
/// Batches run one after another. A batch that fails is reported and skipped;
/// later batches still run. Records keep batch order and, within a batch, the
/// order `fetch_batch` returned them in.
///
/// # Example
///
/// ```ignore
/// let ids = vec![Some("a".to_string()), None, Some("b".to_string())];
/// let result = enrich(&ids, 100, async |batch| api.audio_features(batch).await).await;
/// println!("{} records, {} failed batches", result.records.len(), result.failed_batches().count());
/// ```
pub async fn enrich<R, F>(
    ids: &[Option<String>],
    batch_size: usize,
    mut fetch_batch: F,
) -> Enrichment<R>
where
    F: AsyncFnMut(&[String]) -> Res<Vec<R>>,
{
    let ids: Vec<String> = ids
        .iter()
        .flatten()
        .filter(|id| !id.is_empty())
        .cloned()
        .collect();

    if ids.is_empty() {
        info!("No track ids to fetch audio features for");
        return Enrichment::empty();
    }

    let batch_size = batch_size.clamp(1, MAX_BATCH_SIZE);
    let total = ids.len().div_ceil(batch_size);
    let mut result = Enrichment::empty();

    for (index, batch) in ids.chunks(batch_size).enumerate() {
        match fetch_batch(batch).await {
            Ok(mut records) => {
                success!(
                    "Batch {}/{}: {} features for {} tracks",
                    index + 1,
                    total,
                    records.len(),
                    batch.len()
                );
                result.batches.push(BatchReport {
                    index,
                    requested: batch.len(),
                    returned: records.len(),
                    error: None,
                });
                result.records.append(&mut records);
            }
            Err(e) => {
                warning!("Batch {}/{} failed: {}", index + 1, total, e);
                result.batches.push(BatchReport {
                    index,
                    requested: batch.len(),
                    returned: 0,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    result
}
