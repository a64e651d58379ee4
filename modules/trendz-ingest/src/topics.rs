use trendz_common::{niches, StorageError};

use crate::traits::TrendStore;

/// Setting key for the dynamically configured target hashtag.
pub const SETTING_TARGET_HASHTAG: &str = "target_hashtag";

/// Last-resort topic when neither a setting nor a niche default exists.
pub const DEFAULT_TOPIC: &str = "skincare";

/// Resolve the hashtag to scrape for a niche, in priority order:
/// dynamic setting, static niche default, hard-coded fallback.
/// Blank setting values count as absent.
pub async fn resolve_topic(
    store: &dyn TrendStore,
    niche_id: i32,
) -> Result<String, StorageError> {
    if let Some(value) = store.get_setting(SETTING_TARGET_HASHTAG).await? {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }

    Ok(niches::default_topic(niche_id)
        .unwrap_or(DEFAULT_TOPIC)
        .to_string())
}
