//! Boundary tests — mock the two collaborator traits, call one pipeline
//! entry point, assert the report and the stored state.

use std::sync::Arc;

use serde_json::json;

use crate::competitors::CompetitorSync;
use crate::error::IngestError;
use crate::pipeline::TrendPipeline;
use crate::testing::*;

// ---------------------------------------------------------------------------
// Trend ingestion
// ---------------------------------------------------------------------------

#[tokio::test]
async fn viral_item_flows_to_a_stored_trend_and_one_alert() {
    let fetcher = MockFetcher::new().on_hashtag(
        "skincare",
        vec![json!({ "text": "dance trend", "stats": { "diggCount": 45000 } })],
    );
    let store = Arc::new(MemoryStore::new());

    let pipeline = TrendPipeline::new(Arc::new(fetcher), store.clone(), 5);
    let report = pipeline.run(1, "TikTok", 7).await.unwrap();

    assert_eq!(report.items_fetched, 1);
    assert_eq!(report.trends_inserted, 1);
    assert_eq!(report.notifications_sent, 1);

    let trends = store.trends();
    assert_eq!(trends.len(), 1);
    assert_eq!(trends[0].keyword, "dance trend");
    assert_eq!(trends[0].growth_score, 90.0);
    assert!(trends[0].is_viral);

    let notifications = store.notifications();
    assert_eq!(notifications.len(), 1);
    assert!(notifications[0].message.starts_with("[Viral Alert]"));
    assert_eq!(notifications[0].user_id, 7);
}

#[tokio::test]
async fn rerunning_a_batch_inserts_nothing_and_stays_quiet() {
    let fetcher = Arc::new(MockFetcher::new().on_hashtag(
        "skincare",
        vec![
            hashtag_item("morning routine", 45_000),
            hashtag_item("spf myths", 2_000),
        ],
    ));
    let store = Arc::new(MemoryStore::new());
    let pipeline = TrendPipeline::new(fetcher, store.clone(), 5);

    let first = pipeline.run(1, "TikTok", 7).await.unwrap();
    assert_eq!(first.trends_inserted, 2);
    assert_eq!(first.notifications_sent, 1);

    let second = pipeline.run(1, "TikTok", 7).await.unwrap();
    assert_eq!(second.items_fetched, 2);
    assert_eq!(second.trends_inserted, 0);
    assert_eq!(second.notifications_sent, 0, "no re-alerting on rerun");

    assert_eq!(store.trends().len(), 2);
    assert_eq!(store.notifications().len(), 1);
}

#[tokio::test]
async fn setting_override_changes_the_scraped_topic() {
    // Only "glassskin" is registered: the run succeeds iff the setting won.
    let fetcher = MockFetcher::new().on_hashtag("glassskin", vec![hashtag_item("glass skin", 500)]);
    let store = Arc::new(MemoryStore::new().with_setting("target_hashtag", "glassskin"));

    let pipeline = TrendPipeline::new(Arc::new(fetcher), store.clone(), 5);
    let report = pipeline.run(1, "TikTok", 7).await.unwrap();

    assert_eq!(report.trends_inserted, 1);
    assert_eq!(store.trends()[0].growth_score, 5.0, "500 likes hits the floor");
}

#[tokio::test]
async fn malformed_items_degrade_to_placeholder_trends() {
    let fetcher = MockFetcher::new().on_hashtag("skincare", vec![json!({ "unrelated": true })]);
    let store = Arc::new(MemoryStore::new());

    let pipeline = TrendPipeline::new(Arc::new(fetcher), store.clone(), 5);
    let report = pipeline.run(1, "TikTok", 7).await.unwrap();

    assert_eq!(report.trends_inserted, 1);
    let trends = store.trends();
    assert_eq!(trends[0].keyword, "TikTok Trend");
    assert_eq!(trends[0].growth_score, 0.0);
}

#[tokio::test]
async fn upstream_failure_aborts_the_run() {
    let fetcher = MockFetcher::new(); // nothing registered
    let store = Arc::new(MemoryStore::new());

    let pipeline = TrendPipeline::new(Arc::new(fetcher), store.clone(), 5);
    let err = pipeline.run(1, "TikTok", 7).await.unwrap_err();

    assert!(matches!(err, IngestError::Upstream(_)));
    assert!(store.trends().is_empty());
}

#[tokio::test]
async fn storage_failure_aborts_the_run() {
    let fetcher = MockFetcher::new().on_hashtag("skincare", vec![hashtag_item("t", 100)]);
    let store = Arc::new(MemoryStore::new());
    store.fail_writes();

    let pipeline = TrendPipeline::new(Arc::new(fetcher), store.clone(), 5);
    let err = pipeline.run(1, "TikTok", 7).await.unwrap_err();

    assert!(matches!(err, IngestError::Storage(_)));
}

// ---------------------------------------------------------------------------
// Competitor video sync
// ---------------------------------------------------------------------------

#[tokio::test]
async fn partial_fetch_failure_still_processes_everyone() {
    let fetcher = MockFetcher::new()
        .on_profile("alpha", vec![video_item("https://t/v1", 10, 1000)])
        .fail_profile("beta")
        .on_profile("gamma", vec![video_item("https://t/v3", 30, 1000)]);
    let store = Arc::new(MemoryStore::new().with_competitors(
        9,
        vec![
            competitor(1, "@alpha"),
            competitor(2, "beta"),
            competitor(3, "gamma"),
        ],
    ));

    let sync = CompetitorSync::new(Arc::new(fetcher), store.clone(), 5);
    let report = sync.run(9).await.unwrap();

    assert_eq!(report.competitors_processed, 3);
    assert_eq!(report.fetch_failures, 1);
    assert_eq!(report.videos_found, 2);
    assert_eq!(report.videos_inserted, 2);

    let urls: Vec<_> = store
        .competitor_posts()
        .iter()
        .map(|p| p.post_url.clone())
        .collect();
    assert!(urls.contains(&"https://t/v1".to_string()));
    assert!(urls.contains(&"https://t/v3".to_string()));
}

#[tokio::test]
async fn post_urls_dedup_across_runs() {
    let fetcher = Arc::new(
        MockFetcher::new().on_profile("alpha", vec![video_item("https://t/v1", 10, 1000)]),
    );
    let store = Arc::new(MemoryStore::new().with_competitors(9, vec![competitor(1, "alpha")]));
    let sync = CompetitorSync::new(fetcher, store.clone(), 5);

    let first = sync.run(9).await.unwrap();
    assert_eq!(first.videos_inserted, 1);

    let second = sync.run(9).await.unwrap();
    assert_eq!(second.videos_found, 1);
    assert_eq!(second.videos_inserted, 0);
    assert_eq!(store.competitor_posts().len(), 1);
}

#[tokio::test]
async fn a_new_url_for_the_same_competitor_inserts_a_second_post() {
    let store = Arc::new(MemoryStore::new().with_competitors(9, vec![competitor(1, "alpha")]));

    let sync = CompetitorSync::new(
        Arc::new(MockFetcher::new().on_profile("alpha", vec![video_item("https://t/v1", 10, 1000)])),
        store.clone(),
        5,
    );
    sync.run(9).await.unwrap();

    let sync = CompetitorSync::new(
        Arc::new(MockFetcher::new().on_profile("alpha", vec![video_item("https://t/v2", 10, 1000)])),
        store.clone(),
        5,
    );
    sync.run(9).await.unwrap();

    assert_eq!(store.competitor_posts().len(), 2);
}

#[tokio::test]
async fn blank_handles_are_skipped_entirely() {
    let fetcher = MockFetcher::new().on_profile("real", vec![video_item("https://t/v1", 10, 1000)]);
    let store = Arc::new(MemoryStore::new().with_competitors(
        9,
        vec![competitor(1, "@"), competitor(2, "   "), competitor(3, "real")],
    ));

    let sync = CompetitorSync::new(Arc::new(fetcher), store.clone(), 5);
    let report = sync.run(9).await.unwrap();

    assert_eq!(report.competitors_processed, 1);
    assert_eq!(report.videos_inserted, 1);
}

#[tokio::test]
async fn items_without_a_video_url_are_ignored() {
    let fetcher = MockFetcher::new().on_profile(
        "alpha",
        vec![
            json!({ "stats": { "diggCount": 10 } }),
            video_item("https://t/v1", 10, 1000),
        ],
    );
    let store = Arc::new(MemoryStore::new().with_competitors(9, vec![competitor(1, "alpha")]));

    let sync = CompetitorSync::new(Arc::new(fetcher), store.clone(), 5);
    let report = sync.run(9).await.unwrap();

    assert_eq!(report.videos_found, 1);
    assert_eq!(report.videos_inserted, 1);
}

#[tokio::test]
async fn storage_failure_during_sync_is_fatal() {
    let fetcher = MockFetcher::new().on_profile("alpha", vec![video_item("https://t/v1", 10, 1000)]);
    let store = Arc::new(MemoryStore::new().with_competitors(9, vec![competitor(1, "alpha")]));
    store.fail_writes();

    let sync = CompetitorSync::new(Arc::new(fetcher), store.clone(), 5);
    assert!(matches!(sync.run(9).await, Err(IngestError::Storage(_))));
}
