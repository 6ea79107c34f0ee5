/// Bulk selection across pages
///
/// Resolves "select the first N rows of the dataset" by walking pages
/// in order and accumulating ids until N are collected or the dataset
/// runs out. Fetches are strictly sequential, so a failure aborts
/// before anything downstream has started and the caller can keep its
/// prior selection untouched (all-or-nothing commit).

use std::collections::HashSet;
use std::future::Future;

use crate::api::client::FetchError;

use super::data::{Artwork, ArtworkPage};

/// Collect the ids of the first `target_count` records in page order
///
/// Walks pages starting at 1. The page matching `current_page` reuses
/// the already-rendered `current_records` instead of re-fetching; every
/// other page goes through `fetch_page`, one at a time, each awaited
/// before the next begins. A page shorter than `page_size` signals the
/// dataset is exhausted, which terminates early with fewer ids than
/// requested (not an error).
///
/// The function is generic over the fetcher so tests can supply an
/// in-memory dataset.
///
/// # Returns
/// * `Ok(ids)` - the accumulated selection, to be committed wholesale
/// * `Err(e)` - a fetch failed; nothing was committed
pub async fn resolve_bulk_selection<F, Fut>(
    target_count: usize,
    current_page: u32,
    current_records: &[Artwork],
    page_size: usize,
    fetch_page: F,
) -> Result<HashSet<i64>, FetchError>
where
    F: Fn(u32) -> Fut,
    Fut: Future<Output = Result<ArtworkPage, FetchError>>,
{
    let mut selected = HashSet::new();
    let mut remaining = target_count;
    let mut page: u32 = 1;

    while remaining > 0 {
        let fetched;
        let records: &[Artwork] = if page == current_page {
            // The rendered page is already in memory
            current_records
        } else {
            fetched = fetch_page(page).await?;
            &fetched.data
        };

        let take = remaining.min(records.len());
        for artwork in &records[..take] {
            selected.insert(artwork.id);
        }
        remaining -= take;

        if remaining > 0 && records.len() == page_size {
            page += 1;
        } else {
            // Either done, or a short page means there is nothing left
            break;
        }
    }

    Ok(selected)
}
