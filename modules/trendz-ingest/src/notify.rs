// Threshold-triggered notifications. Best-effort: a failed insert is
// logged and never aborts the ingestion run.

use tracing::warn;

use trendz_common::{Notification, Trend};

use crate::traits::TrendStore;

/// Score at or above which a Viral Alert fires.
pub const VIRAL_ALERT_THRESHOLD: f64 = 90.0;

/// Score above which a present sound fires a Trending Sound alert.
pub const TRENDING_SOUND_THRESHOLD: f64 = 80.0;

/// Evaluate both alert rules for one trend. The rules are independent;
/// zero, one, or two notifications come back, each already handed to
/// the store.
pub async fn evaluate_and_notify(
    store: &dyn TrendStore,
    trend: &Trend,
    user_id: i64,
) -> Vec<Notification> {
    let mut emitted = Vec::new();

    if trend.growth_score >= VIRAL_ALERT_THRESHOLD {
        emitted.push(Notification::new(
            user_id,
            "Viral Alert",
            &format!(
                "'{}' is taking off on {} (score {:.0})",
                trend.keyword, trend.platform, trend.growth_score
            ),
        ));
    }

    if let Some(sound) = &trend.sound_name {
        if trend.growth_score > TRENDING_SOUND_THRESHOLD {
            emitted.push(Notification::new(
                user_id,
                "Trending Sound",
                &format!("'{sound}' is used by the rising trend '{}'", trend.keyword),
            ));
        }
    }

    for notification in &emitted {
        if let Err(e) = store.insert_notification(notification).await {
            warn!(error = %e, user_id, "Failed to persist notification, continuing");
        }
    }

    emitted
}
