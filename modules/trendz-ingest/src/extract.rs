// Defensive field extraction from raw provider dataset items.
//
// The actor's output schema drifts: a like count may sit at the top
// level, under `stats`, or under `statistics`. Each field therefore has
// an ordered list of candidate paths, first match wins. A new provider
// shape is a new table entry, not a new branch.

use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

type Path = &'static [&'static str];

const LIKE_COUNT_PATHS: &[Path] = &[
    &["diggCount"],
    &["stats", "diggCount"],
    &["statistics", "diggCount"],
];

const PLAY_COUNT_PATHS: &[Path] = &[
    &["playCount"],
    &["stats", "playCount"],
    &["statistics", "playCount"],
];

const TEXT_PATHS: &[Path] = &[&["text"], &["title"], &["desc"]];

const VIDEO_URL_PATHS: &[Path] = &[&["webVideoUrl"], &["videoUrl"], &["url"]];

const SOUND_NAME_PATHS: &[Path] = &[&["musicMeta", "musicName"], &["music", "title"]];

const SOUND_URL_PATHS: &[Path] = &[&["musicMeta", "playUrl"], &["music", "playUrl"]];

const POSTED_AT_PATHS: &[Path] = &[&["createTimeISO"], &["createTime"]];

fn probe<'a>(item: &'a Value, paths: &[Path]) -> Option<&'a Value> {
    paths
        .iter()
        .find_map(|path| path.iter().try_fold(item, |node, key| node.get(key)))
}

fn probe_str<'a>(item: &'a Value, paths: &[Path]) -> Option<&'a str> {
    probe(item, paths)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// Like count ("diggs"). Missing or malformed counts read as zero.
pub fn like_count(item: &Value) -> u64 {
    probe(item, LIKE_COUNT_PATHS)
        .and_then(Value::as_u64)
        .unwrap_or(0)
}

/// Play count. Missing or malformed counts read as zero.
pub fn play_count(item: &Value) -> u64 {
    probe(item, PLAY_COUNT_PATHS)
        .and_then(Value::as_u64)
        .unwrap_or(0)
}

/// Display text of the post, if any known shape carries one.
pub fn text(item: &Value) -> Option<&str> {
    probe_str(item, TEXT_PATHS)
}

/// Video URL for profile-mode items.
pub fn video_url(item: &Value) -> Option<&str> {
    probe_str(item, VIDEO_URL_PATHS)
}

pub fn sound_name(item: &Value) -> Option<String> {
    probe_str(item, SOUND_NAME_PATHS).map(str::to_string)
}

pub fn sound_url(item: &Value) -> Option<String> {
    probe_str(item, SOUND_URL_PATHS).map(str::to_string)
}

/// Post timestamp: RFC 3339 `createTimeISO`, or unix-seconds `createTime`.
pub fn posted_at(item: &Value) -> Option<DateTime<Utc>> {
    let value = probe(item, POSTED_AT_PATHS)?;
    if let Some(s) = value.as_str() {
        return DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc));
    }
    value
        .as_i64()
        .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn like_count_probes_all_known_shapes() {
        let flat = json!({ "diggCount": 42 });
        let stats = json!({ "stats": { "diggCount": 42 } });
        let statistics = json!({ "statistics": { "diggCount": 42 } });

        assert_eq!(like_count(&flat), 42);
        assert_eq!(like_count(&stats), 42);
        assert_eq!(like_count(&statistics), 42);
    }

    #[test]
    fn earlier_paths_win() {
        let both = json!({ "diggCount": 1, "stats": { "diggCount": 2 } });
        assert_eq!(like_count(&both), 1);
    }

    #[test]
    fn missing_or_malformed_counts_read_zero() {
        assert_eq!(like_count(&json!({})), 0);
        assert_eq!(like_count(&json!({ "diggCount": "many" })), 0);
        assert_eq!(like_count(&json!({ "diggCount": -5 })), 0);
    }

    #[test]
    fn video_url_candidates_in_priority_order() {
        assert_eq!(
            video_url(&json!({ "webVideoUrl": "a", "videoUrl": "b", "url": "c" })),
            Some("a")
        );
        assert_eq!(video_url(&json!({ "videoUrl": "b", "url": "c" })), Some("b"));
        assert_eq!(video_url(&json!({ "url": "c" })), Some("c"));
        assert_eq!(video_url(&json!({})), None);
    }

    #[test]
    fn blank_text_counts_as_absent() {
        assert_eq!(text(&json!({ "text": "   " })), None);
        assert_eq!(text(&json!({ "text": "", "title": "fallback" })), Some("fallback"));
    }

    #[test]
    fn sound_metadata_probes_both_shapes() {
        let meta = json!({ "musicMeta": { "musicName": "One", "playUrl": "u1" } });
        let music = json!({ "music": { "title": "Two", "playUrl": "u2" } });

        assert_eq!(sound_name(&meta).as_deref(), Some("One"));
        assert_eq!(sound_url(&meta).as_deref(), Some("u1"));
        assert_eq!(sound_name(&music).as_deref(), Some("Two"));
        assert_eq!(sound_url(&music).as_deref(), Some("u2"));
        assert_eq!(sound_name(&json!({})), None);
    }

    #[test]
    fn posted_at_reads_iso_then_epoch() {
        let iso = json!({ "createTimeISO": "2026-08-01T12:00:00Z" });
        let epoch = json!({ "createTime": 1_754_000_000 });

        assert!(posted_at(&iso).is_some());
        assert!(posted_at(&epoch).is_some());
        assert!(posted_at(&json!({})).is_none());
        assert!(posted_at(&json!({ "createTimeISO": "yesterday" })).is_none());
    }
}
