use apify_client::ApifyError;
use thiserror::Error;
use trendz_common::StorageError;

/// Terminal error of an ingestion run. The caller logs it and may retry
/// the whole batch; the core never retries internally.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Upstream provider error: {0}")]
    Upstream(#[from] ApifyError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
