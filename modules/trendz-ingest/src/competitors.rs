// Competitor video sync: bounded-parallel profile fetches, then a
// sequential persist pass with URL-exact dedup.

use std::sync::Arc;

use chrono::Utc;
use futures::stream::{self, StreamExt};
use serde_json::Value;
use tracing::{info, warn};

use apify_client::ApifyError;
use trendz_common::{Competitor, CompetitorPost};

use crate::error::IngestError;
use crate::extract;
use crate::traits::{TrendFetcher, TrendStore};

/// Concurrent profile fetches in flight. Bounded to respect the
/// provider's rate limits.
pub const MAX_CONCURRENT_FETCHES: usize = 3;

/// Outcome of one competitor sync run. Partial success is the normal
/// completion mode: failed fetches are counted, not propagated.
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    pub competitors_processed: usize,
    pub videos_found: usize,
    pub videos_inserted: usize,
    pub fetch_failures: usize,
}

pub struct CompetitorSync {
    fetcher: Arc<dyn TrendFetcher>,
    store: Arc<dyn TrendStore>,
    videos_per_competitor: u32,
}

impl CompetitorSync {
    pub fn new(
        fetcher: Arc<dyn TrendFetcher>,
        store: Arc<dyn TrendStore>,
        videos_per_competitor: u32,
    ) -> Self {
        Self {
            fetcher,
            store,
            videos_per_competitor,
        }
    }

    /// Sync recent videos for every competitor on the user's watchlist.
    /// Competitors whose handle normalizes to nothing are skipped; a
    /// failed fetch skips that competitor only; a storage failure
    /// aborts the run.
    pub async fn run(&self, user_id: i64) -> Result<SyncReport, IngestError> {
        let competitors = self.store.competitors_for_user(user_id).await?;
        info!(
            user_id,
            competitors = competitors.len(),
            "Starting competitor video sync"
        );

        // Fetch phase: independent per competitor, bounded fan-out.
        let limit = self.videos_per_competitor;
        let fetches: Vec<(Competitor, Result<Vec<Value>, ApifyError>)> =
            stream::iter(competitors.into_iter().filter_map(|competitor| {
                let handle = normalize_handle(&competitor.account_handle)?;
                let fetcher = Arc::clone(&self.fetcher);
                Some(async move {
                    let items = fetcher.profile_items(&handle, limit).await;
                    (competitor, items)
                })
            }))
            .buffer_unordered(MAX_CONCURRENT_FETCHES)
            .collect()
            .await;

        // Persist phase: single writer, sequential.
        let mut report = SyncReport::default();
        for (competitor, result) in fetches {
            report.competitors_processed += 1;
            let items = match result {
                Ok(items) => items,
                Err(e) => {
                    report.fetch_failures += 1;
                    warn!(
                        competitor = %competitor.account_handle,
                        error = %e,
                        "Competitor fetch failed, continuing"
                    );
                    continue;
                }
            };

            for item in &items {
                let Some(url) = extract::video_url(item) else {
                    continue;
                };
                report.videos_found += 1;
                if self.store.competitor_post_exists(url).await? {
                    continue;
                }
                let post = CompetitorPost {
                    competitor_id: competitor.id,
                    post_url: url.to_string(),
                    engagement_rate: engagement_rate(item),
                    posted_at: extract::posted_at(item).unwrap_or_else(Utc::now),
                };
                self.store.insert_competitor_post(&post).await?;
                report.videos_inserted += 1;
            }
        }

        info!(
            user_id,
            processed = report.competitors_processed,
            found = report.videos_found,
            inserted = report.videos_inserted,
            failures = report.fetch_failures,
            "Competitor video sync finished"
        );
        Ok(report)
    }
}

/// Strip the leading '@' and surrounding whitespace; None when nothing
/// remains.
fn normalize_handle(handle: &str) -> Option<String> {
    let cleaned = handle.trim().trim_start_matches('@').trim();
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}

/// Likes per play as a percentage, clamped to [0, 100]. Zero when the
/// item carries no play count.
fn engagement_rate(item: &Value) -> f64 {
    let plays = extract::play_count(item);
    if plays == 0 {
        return 0.0;
    }
    (extract::like_count(item) as f64 / plays as f64 * 100.0).min(100.0)
}
