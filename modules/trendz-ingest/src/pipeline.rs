// Hashtag trend ingestion: fetch, normalize, gate, notify.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::error::IngestError;
use crate::traits::{TrendFetcher, TrendStore};
use crate::{gate, normalize, notify, topics};

/// Outcome of one trend ingestion run.
#[derive(Debug, Clone)]
pub struct IngestReport {
    pub run_id: Uuid,
    pub items_fetched: usize,
    pub trends_inserted: usize,
    pub notifications_sent: usize,
}

pub struct TrendPipeline {
    fetcher: Arc<dyn TrendFetcher>,
    store: Arc<dyn TrendStore>,
    results_per_page: u32,
}

impl TrendPipeline {
    pub fn new(
        fetcher: Arc<dyn TrendFetcher>,
        store: Arc<dyn TrendStore>,
        results_per_page: u32,
    ) -> Self {
        Self {
            fetcher,
            store,
            results_per_page,
        }
    }

    /// Run one ingestion batch for a niche. Aborts on an upstream or
    /// storage failure; a malformed item degrades to a placeholder
    /// trend instead. Notifications fire only for freshly inserted
    /// trends, so re-running a batch never re-alerts.
    pub async fn run(
        &self,
        niche_id: i32,
        platform: &str,
        user_id: i64,
    ) -> Result<IngestReport, IngestError> {
        let run_id = Uuid::new_v4();
        let topic = topics::resolve_topic(self.store.as_ref(), niche_id).await?;
        info!(%run_id, niche_id, topic = %topic, "Starting trend ingestion run");

        let items = self
            .fetcher
            .hashtag_items(&topic, self.results_per_page)
            .await?;

        let mut trends_inserted = 0;
        let mut notifications_sent = 0;
        for item in &items {
            let trend = normalize::normalize(item, niche_id, platform);
            if gate::persist_if_new(self.store.as_ref(), &trend).await? {
                trends_inserted += 1;
                notifications_sent +=
                    notify::evaluate_and_notify(self.store.as_ref(), &trend, user_id)
                        .await
                        .len();
            }
        }

        info!(
            %run_id,
            items = items.len(),
            trends_inserted,
            notifications_sent,
            "Trend ingestion run finished"
        );

        Ok(IngestReport {
            run_id,
            items_fetched: items.len(),
            trends_inserted,
            notifications_sent,
        })
    }
}
