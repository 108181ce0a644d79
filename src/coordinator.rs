//! Concurrent enrichment of a whole batch.
//!
//! Articles are enriched through a bounded `buffer_unordered` stream, so at
//! most `concurrency` page fetches are in flight at once. Completions arrive
//! in any order; each carries its submission index and lands in a
//! preallocated slot, so the returned vector is always in input order.
//!
//! A single consumer loop drains the stream, which serializes progress
//! reporting: `on_progress` sees `(1, n)`, `(2, n)`, …, `(n, n)` exactly once
//! each.

use crate::enricher::{PageFetcher, enrich};
use crate::models::{EnrichmentResult, RawArticle};
use crate::resolver::resolve;
use futures::FutureExt;
use futures::stream::{self, StreamExt};
use std::panic::AssertUnwindSafe;
use std::time::Instant;
use tracing::{info, instrument, warn};

/// Default number of concurrent article fetches.
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Enrich every article in `items`, returning one result per input index.
///
/// A panic escaping an enrichment is contained to its own article, which gets
/// the URL-only result instead. The batch itself never fails.
#[instrument(level = "info", skip_all, fields(total = items.len(), concurrency = concurrency))]
pub async fn enrich_batch<F, P>(
    fetcher: &F,
    items: &[RawArticle],
    concurrency: usize,
    mut on_progress: P,
) -> Vec<EnrichmentResult>
where
    F: PageFetcher,
    P: FnMut(usize, usize),
{
    let t0 = Instant::now();
    let total = items.len();
    let mut slots: Vec<Option<EnrichmentResult>> = vec![None; total];

    let mut completions = stream::iter(items.iter().enumerate())
        .map(|(index, item)| async move {
            let outcome = AssertUnwindSafe(enrich(fetcher, &item.link))
                .catch_unwind()
                .await;
            let result = outcome.unwrap_or_else(|_| {
                warn!(index, link = %item.link, "Enrichment panicked; using URL fallback");
                EnrichmentResult::unpicked(resolve(&item.link))
            });
            (index, result)
        })
        .buffer_unordered(concurrency.max(1));

    let mut done = 0;
    while let Some((index, result)) = completions.next().await {
        slots[index] = Some(result);
        done += 1;
        on_progress(done, total);
    }

    let results: Vec<EnrichmentResult> = slots
        .into_iter()
        .zip(items)
        .map(|(slot, item)| slot.unwrap_or_else(|| EnrichmentResult::unpicked(resolve(&item.link))))
        .collect();

    info!(
        total,
        picks = results.iter().filter(|r| r.is_pick).count(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "Enriched article batch"
    );
    results
}
