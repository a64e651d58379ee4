// Trait abstractions for the pipeline's two external collaborators.
//
// TrendFetcher — the upstream provider seam; ApifyClient implements it.
// TrendStore — the injected repository capability; all persistence goes
//   through it, the pipeline owns no storage of its own.
//
// These enable deterministic testing with MockFetcher and MemoryStore:
// no network, no database.

use async_trait::async_trait;
use serde_json::Value;

use apify_client::{ApifyClient, ApifyError};
use trendz_common::{Competitor, CompetitorPost, Notification, StorageError, Trend};

// ---------------------------------------------------------------------------
// TrendFetcher — the provider seam
// ---------------------------------------------------------------------------

#[async_trait]
pub trait TrendFetcher: Send + Sync {
    /// Fetch raw dataset items for one hashtag via the two-phase run.
    async fn hashtag_items(&self, hashtag: &str, limit: u32) -> Result<Vec<Value>, ApifyError>;

    /// Fetch recent raw video items for one profile handle.
    async fn profile_items(&self, handle: &str, limit: u32) -> Result<Vec<Value>, ApifyError>;
}

#[async_trait]
impl TrendFetcher for ApifyClient {
    async fn hashtag_items(&self, hashtag: &str, limit: u32) -> Result<Vec<Value>, ApifyError> {
        self.scrape_hashtag(hashtag, limit).await
    }

    async fn profile_items(&self, handle: &str, limit: u32) -> Result<Vec<Value>, ApifyError> {
        ApifyClient::profile_items(self, &[handle.to_string()], limit).await
    }
}

// ---------------------------------------------------------------------------
// TrendStore — the repository capability
// ---------------------------------------------------------------------------

/// Storage operations the pipeline consumes. Implementations own schema
/// and transactions; the pipeline only sees these calls.
#[async_trait]
pub trait TrendStore: Send + Sync {
    /// Look up a trend by its identity tuple. The keyword comparison is
    /// case-insensitive; platform and niche are exact.
    async fn find_trend(
        &self,
        keyword: &str,
        platform: &str,
        niche_id: i32,
    ) -> Result<Option<Trend>, StorageError>;

    async fn insert_trend(&self, trend: &Trend) -> Result<(), StorageError>;

    async fn insert_notification(&self, notification: &Notification) -> Result<(), StorageError>;

    async fn insert_competitor_post(&self, post: &CompetitorPost) -> Result<(), StorageError>;

    /// Exact-string check: has this post URL been stored before?
    async fn competitor_post_exists(&self, url: &str) -> Result<bool, StorageError>;

    async fn get_setting(&self, key: &str) -> Result<Option<String>, StorageError>;

    async fn upsert_setting(&self, key: &str, value: &str) -> Result<(), StorageError>;

    async fn competitors_for_user(&self, user_id: i64) -> Result<Vec<Competitor>, StorageError>;
}
