// Analysis verdict strings for the dashboard. Plain functions over the
// canonical records; no analysis state is held anywhere.

use trendz_common::{Competitor, Trend};

use crate::score::VIRAL_THRESHOLD;

/// Model tag stamped into every analysis line.
pub const ANALYSIS_MODEL: &str = "Trendz-ML-v1";

/// One-line verdict for a trend: high viral potential or stable growth.
pub fn analyze_trend(trend: &Trend) -> String {
    if trend.growth_score > VIRAL_THRESHOLD {
        format!(
            "{ANALYSIS_MODEL}: keyword '{}' has high viral potential on {}",
            trend.keyword, trend.platform
        )
    } else {
        format!(
            "{ANALYSIS_MODEL}: keyword '{}' shows stable growth",
            trend.keyword
        )
    }
}

/// Strategy recommendation for a watched competitor.
pub fn analyze_competitor(competitor: &Competitor) -> String {
    format!(
        "{ANALYSIS_MODEL}: for @{}, focus on replicating the hooks of their top-performing posts",
        competitor.account_handle
    )
}
