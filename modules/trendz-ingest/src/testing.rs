// Test mocks for the ingestion pipeline.
//
// Two mocks matching the two trait boundaries:
// - MockFetcher (TrendFetcher) — HashMap-based hashtag/handle → items
// - MemoryStore (TrendStore) — stateful in-memory repository with
//   case-insensitive trend lookup and write-failure injection
//
// Plus builders for raw dataset items in the provider's shapes.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use apify_client::ApifyError;
use trendz_common::{Competitor, CompetitorPost, Notification, Setting, StorageError, Trend};

use crate::traits::{TrendFetcher, TrendStore};

// ---------------------------------------------------------------------------
// MockFetcher
// ---------------------------------------------------------------------------

/// HashMap-based fetcher. Unregistered hashtags and handles return an
/// Api error; handles registered with `fail_profile` simulate a network
/// failure. Builder pattern: `.on_hashtag()`, `.on_profile()`.
#[derive(Default)]
pub struct MockFetcher {
    hashtags: HashMap<String, Vec<Value>>,
    profiles: HashMap<String, Vec<Value>>,
    failing_profiles: HashSet<String>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_hashtag(mut self, hashtag: &str, items: Vec<Value>) -> Self {
        self.hashtags.insert(hashtag.to_string(), items);
        self
    }

    pub fn on_profile(mut self, handle: &str, items: Vec<Value>) -> Self {
        self.profiles.insert(handle.to_string(), items);
        self
    }

    pub fn fail_profile(mut self, handle: &str) -> Self {
        self.failing_profiles.insert(handle.to_string());
        self
    }
}

#[async_trait]
impl TrendFetcher for MockFetcher {
    async fn hashtag_items(&self, hashtag: &str, _limit: u32) -> Result<Vec<Value>, ApifyError> {
        self.hashtags
            .get(hashtag)
            .cloned()
            .ok_or_else(|| ApifyError::Api {
                status: 404,
                message: format!("MockFetcher: no items registered for #{hashtag}"),
            })
    }

    async fn profile_items(&self, handle: &str, _limit: u32) -> Result<Vec<Value>, ApifyError> {
        if self.failing_profiles.contains(handle) {
            return Err(ApifyError::Network(format!(
                "MockFetcher: simulated failure for {handle}"
            )));
        }
        self.profiles
            .get(handle)
            .cloned()
            .ok_or_else(|| ApifyError::Api {
                status: 404,
                message: format!("MockFetcher: no items registered for {handle}"),
            })
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// Stateful in-memory store implementing the repository contract:
/// trend lookup is case-insensitive on keyword, competitor-post lookup
/// is exact on URL.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    trends: Vec<Trend>,
    notifications: Vec<Notification>,
    competitor_posts: Vec<CompetitorPost>,
    competitors: HashMap<i64, Vec<Competitor>>,
    settings: Vec<Setting>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_setting(self, key: &str, value: &str) -> Self {
        self.inner.lock().unwrap().settings.push(Setting {
            key: key.to_string(),
            value: value.to_string(),
        });
        self
    }

    pub fn with_competitors(self, user_id: i64, competitors: Vec<Competitor>) -> Self {
        self.inner
            .lock()
            .unwrap()
            .competitors
            .insert(user_id, competitors);
        self
    }

    /// Every subsequent write fails with a StorageError.
    pub fn fail_writes(&self) {
        self.inner.lock().unwrap().fail_writes = true;
    }

    pub fn trends(&self) -> Vec<Trend> {
        self.inner.lock().unwrap().trends.clone()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.inner.lock().unwrap().notifications.clone()
    }

    pub fn competitor_posts(&self) -> Vec<CompetitorPost> {
        self.inner.lock().unwrap().competitor_posts.clone()
    }

    fn check_writable(inner: &Inner) -> Result<(), StorageError> {
        if inner.fail_writes {
            return Err(StorageError::new("MemoryStore: writes disabled"));
        }
        Ok(())
    }
}

#[async_trait]
impl TrendStore for MemoryStore {
    async fn find_trend(
        &self,
        keyword: &str,
        platform: &str,
        niche_id: i32,
    ) -> Result<Option<Trend>, StorageError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .trends
            .iter()
            .find(|t| {
                t.keyword.eq_ignore_ascii_case(keyword)
                    && t.platform == platform
                    && t.niche_id == niche_id
            })
            .cloned())
    }

    async fn insert_trend(&self, trend: &Trend) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().unwrap();
        Self::check_writable(&inner)?;
        inner.trends.push(trend.clone());
        Ok(())
    }

    async fn insert_notification(&self, notification: &Notification) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().unwrap();
        Self::check_writable(&inner)?;
        inner.notifications.push(notification.clone());
        Ok(())
    }

    async fn insert_competitor_post(&self, post: &CompetitorPost) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().unwrap();
        Self::check_writable(&inner)?;
        inner.competitor_posts.push(post.clone());
        Ok(())
    }

    async fn competitor_post_exists(&self, url: &str) -> Result<bool, StorageError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.competitor_posts.iter().any(|p| p.post_url == url))
    }

    async fn get_setting(&self, key: &str) -> Result<Option<String>, StorageError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .settings
            .iter()
            .find(|s| s.key == key)
            .map(|s| s.value.clone()))
    }

    async fn upsert_setting(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().unwrap();
        Self::check_writable(&inner)?;
        if let Some(setting) = inner.settings.iter_mut().find(|s| s.key == key) {
            setting.value = value.to_string();
        } else {
            inner.settings.push(Setting {
                key: key.to_string(),
                value: value.to_string(),
            });
        }
        Ok(())
    }

    async fn competitors_for_user(&self, user_id: i64) -> Result<Vec<Competitor>, StorageError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.competitors.get(&user_id).cloned().unwrap_or_default())
    }
}

// ---------------------------------------------------------------------------
// Payload builders
// ---------------------------------------------------------------------------

/// A hashtag dataset item with text and a nested stats like count.
pub fn hashtag_item(text: &str, digg_count: u64) -> Value {
    json!({ "text": text, "stats": { "diggCount": digg_count } })
}

/// A profile dataset item carrying a video URL and counts.
pub fn video_item(url: &str, digg_count: u64, play_count: u64) -> Value {
    json!({
        "webVideoUrl": url,
        "stats": { "diggCount": digg_count, "playCount": play_count },
        "createTimeISO": "2026-08-01T12:00:00Z"
    })
}

pub fn competitor(id: i64, handle: &str) -> Competitor {
    Competitor {
        id,
        account_handle: handle.to_string(),
    }
}
