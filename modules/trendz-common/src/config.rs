use std::env;

/// Ingestion configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub apify_token: String,
    /// Override for the provider API root. `None` uses the client default.
    pub apify_base_url: Option<String>,
    /// Items requested per hashtag scrape run.
    pub results_per_page: u32,
    /// Recent videos fetched per competitor.
    pub videos_per_competitor: u32,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        Self {
            apify_token: required_env("APIFY_TOKEN"),
            apify_base_url: env::var("APIFY_BASE_URL").ok(),
            results_per_page: parsed_env("RESULTS_PER_PAGE", 5),
            videos_per_competitor: parsed_env("VIDEOS_PER_COMPETITOR", 5),
        }
    }

    /// Log the loaded configuration without secrets.
    pub fn log_redacted(&self) {
        tracing::info!(
            apify_base_url = self.apify_base_url.as_deref().unwrap_or("<default>"),
            results_per_page = self.results_per_page,
            videos_per_competitor = self.videos_per_competitor,
            "Config loaded (token redacted)"
        );
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}

fn parsed_env(key: &str, default: u32) -> u32 {
    match env::var(key) {
        Ok(v) => v
            .parse()
            .unwrap_or_else(|_| panic!("{key} must be a number")),
        Err(_) => default,
    }
}
