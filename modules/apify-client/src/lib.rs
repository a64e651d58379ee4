pub mod error;
pub mod types;

pub use error::{ApifyError, Result};
pub use types::{HashtagScrapeInput, ProfileScrapeInput};

use serde_json::Value;

const BASE_URL: &str = "https://api.apify.com/v2";

/// Actor ID for clockworks/tiktok-scraper.
const TIKTOK_SCRAPER: &str = "clockworks~tiktok-scraper";

/// Seconds the provider may spend finishing a run before the submission
/// call returns. Runs that finish inside the window come back SUCCEEDED
/// with their dataset id already set.
const WAIT_FOR_FINISH_SECS: u32 = 120;

/// Memory cap per actor run. Keeps runs under the plan RAM limit.
const RUN_MEMORY_MBYTES: u32 = 512;

pub struct ApifyClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl ApifyClient {
    pub fn new(token: String) -> Self {
        Self::with_base_url(BASE_URL.to_string(), token)
    }

    /// Client against a non-default API root. Used by tests and by
    /// deployments that route through a proxy.
    pub fn with_base_url(base_url: String, token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Run a hashtag scrape end-to-end: submit the run with a bounded
    /// synchronous wait, then fetch the dataset items it produced.
    ///
    /// Items come back as raw JSON values. The actor's output schema
    /// drifts between versions, so field extraction is the caller's job.
    pub async fn scrape_hashtag(
        &self,
        hashtag: &str,
        results_per_page: u32,
    ) -> Result<Vec<Value>> {
        let input = HashtagScrapeInput {
            hashtags: vec![hashtag.to_string()],
            results_per_page,
            memory_mbytes: RUN_MEMORY_MBYTES,
        };

        tracing::info!(hashtag, results_per_page, "Starting hashtag scrape run");

        let url = format!(
            "{}/acts/{}/runs?waitForFinish={}",
            self.base_url, TIKTOK_SCRAPER, WAIT_FOR_FINISH_SECS
        );
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&input)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(ApifyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let envelope: Value = serde_json::from_str(&body)?;
        let dataset_id = envelope
            .pointer("/data/defaultDatasetId")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ApifyError::MissingDatasetId { body: body.clone() })?
            .to_string();

        tracing::info!(dataset_id = %dataset_id, "Run finished, fetching dataset items");
        self.dataset_items(&dataset_id).await
    }

    /// Fetch all items from a dataset produced by a finished run.
    pub async fn dataset_items(&self, dataset_id: &str) -> Result<Vec<Value>> {
        let url = format!(
            "{}/datasets/{}/items?format=json",
            self.base_url, dataset_id
        );
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApifyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let items: Vec<Value> = resp.json().await?;
        tracing::info!(count = items.len(), "Fetched dataset items");
        Ok(items)
    }

    /// Fetch recent videos for a set of profiles. Uses the synchronous
    /// run variant: one call, items directly in the response body.
    pub async fn profile_items(
        &self,
        profiles: &[String],
        results_per_page: u32,
    ) -> Result<Vec<Value>> {
        let input = ProfileScrapeInput {
            profiles: profiles.to_vec(),
            results_per_page,
        };

        tracing::info!(
            profiles = profiles.len(),
            results_per_page,
            "Starting synchronous profile scrape"
        );

        let url = format!(
            "{}/acts/{}/run-sync-get-dataset-items",
            self.base_url, TIKTOK_SCRAPER
        );
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&input)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApifyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let items: Vec<Value> = resp.json().await?;
        tracing::info!(count = items.len(), "Fetched profile items");
        Ok(items)
    }
}
