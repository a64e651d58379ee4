use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Trend type recorded for hashtag-sourced trends.
pub const TREND_TYPE_HASHTAG: &str = "Hashtag";

/// A detected keyword's measured popularity on one platform within one
/// niche. Identity is the (lowercased keyword, platform, niche_id)
/// tuple — the store holds at most one record per tuple.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trend {
    pub keyword: String,
    pub platform: String, // "TikTok", "Instagram"
    pub niche_id: i32,
    /// Bounded popularity metric in [0, 100].
    pub growth_score: f64,
    /// Derived: growth_score > 80.
    pub is_viral: bool,
    /// When this ingestion run saw the trend, not the provider's timestamp.
    pub discovered_at: DateTime<Utc>,
    pub sound_name: Option<String>,
    pub sound_url: Option<String>,
    pub trend_type: String,
}

impl Trend {
    /// Legacy alias for `growth_score`. Older dashboard consumers used
    /// both names for the same number; storage keeps a single field.
    pub fn engagement_score(&self) -> f64 {
        self.growth_score
    }
}

/// A post by a tracked competitor. `post_url` is unique across all
/// posts — the provider's URLs are stable identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorPost {
    pub competitor_id: i64,
    pub post_url: String,
    pub engagement_rate: f64,
    pub posted_at: DateTime<Utc>,
}

/// A competitor account on a user's watchlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competitor {
    pub id: i64,
    pub account_handle: String,
}

/// An alert persisted for a user. Only `is_read` changes after insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub user_id: i64,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}

impl Notification {
    /// Builds the "[title] body" message format used across the app.
    pub fn new(user_id: i64, title: &str, body: &str) -> Self {
        Self {
            user_id,
            message: format!("[{title}] {body}"),
            created_at: Utc::now(),
            is_read: false,
        }
    }
}

/// A key/value configuration pair with upsert semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setting {
    pub key: String,
    pub value: String,
}
