// Dedup & persistence gate.
//
// Check-then-insert under a single-writer assumption: one ingestion run
// is the sole writer for its scope. Concurrent schedules would need a
// unique-constraint upsert in the repository instead.

use tracing::{debug, info};

use trendz_common::{StorageError, Trend};

use crate::traits::TrendStore;

/// Insert `trend` unless its (keyword, platform, niche) identity is
/// already stored. Keyword comparison is case-insensitive. Returns
/// whether an insert happened.
pub async fn persist_if_new(
    store: &dyn TrendStore,
    trend: &Trend,
) -> Result<bool, StorageError> {
    let existing = store
        .find_trend(&trend.keyword, &trend.platform, trend.niche_id)
        .await?;

    if existing.is_some() {
        debug!(
            keyword = %trend.keyword,
            platform = %trend.platform,
            niche_id = trend.niche_id,
            "Duplicate trend skipped"
        );
        return Ok(false);
    }

    store.insert_trend(trend).await?;
    Ok(true)
}

/// Gate a whole batch in sequence. The first storage failure aborts the
/// remaining items; already-inserted trends stay. Returns the insert
/// count.
pub async fn persist_batch(
    store: &dyn TrendStore,
    trends: &[Trend],
) -> Result<usize, StorageError> {
    let mut inserted = 0;
    for trend in trends {
        if persist_if_new(store, trend).await? {
            inserted += 1;
        }
    }
    info!(total = trends.len(), inserted, "Trend batch persisted");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::normalize::normalize;
    use crate::testing::MemoryStore;

    fn trend(keyword: &str) -> Trend {
        normalize(&json!({ "text": keyword, "stats": { "diggCount": 1000 } }), 1, "TikTok")
    }

    #[tokio::test]
    async fn second_ingest_of_the_same_tuple_is_a_no_op() {
        let store = MemoryStore::new();
        assert!(persist_if_new(&store, &trend("skincare routine")).await.unwrap());
        assert!(!persist_if_new(&store, &trend("skincare routine")).await.unwrap());
        assert_eq!(store.trends().len(), 1);
    }

    #[tokio::test]
    async fn keyword_identity_ignores_case() {
        let store = MemoryStore::new();
        assert!(persist_if_new(&store, &trend("Skincare")).await.unwrap());
        assert!(!persist_if_new(&store, &trend("skincare")).await.unwrap());
        assert_eq!(store.trends().len(), 1);
    }

    #[tokio::test]
    async fn platform_and_niche_widen_the_identity() {
        let store = MemoryStore::new();
        let mut on_instagram = trend("skincare");
        on_instagram.platform = "Instagram".to_string();
        let mut other_niche = trend("skincare");
        other_niche.niche_id = 2;

        assert!(persist_if_new(&store, &trend("skincare")).await.unwrap());
        assert!(persist_if_new(&store, &on_instagram).await.unwrap());
        assert!(persist_if_new(&store, &other_niche).await.unwrap());
        assert_eq!(store.trends().len(), 3);
    }

    #[tokio::test]
    async fn batch_counts_only_fresh_inserts() {
        let store = MemoryStore::new();
        let batch = vec![trend("one"), trend("two"), trend("one")];
        assert_eq!(persist_batch(&store, &batch).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn storage_failure_aborts_the_batch() {
        let store = MemoryStore::new();
        store.fail_writes();
        let batch = vec![trend("one"), trend("two")];
        assert!(persist_batch(&store, &batch).await.is_err());
        assert!(store.trends().is_empty());
    }
}
