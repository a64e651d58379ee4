use chrono::Utc;
use serde_json::Value;

use trendz_common::{Trend, TREND_TYPE_HASHTAG};

use crate::{extract, score};

/// Longest keyword the store accepts for display.
pub const MAX_KEYWORD_LEN: usize = 200;

/// Marker appended to truncated keywords.
const ELLIPSIS: &str = "...";

/// Build a canonical Trend from one raw dataset item.
///
/// Never fails: missing text falls back to a platform placeholder and a
/// missing count scores zero, so a malformed item degrades instead of
/// aborting the batch.
pub fn normalize(item: &Value, niche_id: i32, platform: &str) -> Trend {
    let keyword = match extract::text(item) {
        Some(text) => truncate_keyword(text),
        None => format!("{platform} Trend"),
    };

    let growth_score = score::growth_score(extract::like_count(item));

    Trend {
        keyword,
        platform: platform.to_string(),
        niche_id,
        growth_score,
        is_viral: score::is_viral(growth_score),
        discovered_at: Utc::now(),
        sound_name: extract::sound_name(item),
        sound_url: extract::sound_url(item),
        trend_type: TREND_TYPE_HASHTAG.to_string(),
    }
}

/// Truncate to MAX_KEYWORD_LEN chars, ellipsis marker included.
fn truncate_keyword(text: &str) -> String {
    if text.chars().count() <= MAX_KEYWORD_LEN {
        return text.to_string();
    }
    let cut: String = text.chars().take(MAX_KEYWORD_LEN - ELLIPSIS.len()).collect();
    format!("{cut}{ELLIPSIS}")
}
