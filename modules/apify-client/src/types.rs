use serde::Serialize;

/// Input for the clockworks/tiktok-scraper actor in hashtag mode.
#[derive(Debug, Clone, Serialize)]
pub struct HashtagScrapeInput {
    pub hashtags: Vec<String>,
    #[serde(rename = "resultsPerPage")]
    pub results_per_page: u32,
    #[serde(rename = "memoryMbytes")]
    pub memory_mbytes: u32,
}

/// Input for the clockworks/tiktok-scraper actor in profile mode.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileScrapeInput {
    pub profiles: Vec<String>,
    #[serde(rename = "resultsPerPage")]
    pub results_per_page: u32,
}
