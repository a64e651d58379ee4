use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialize structured logging for the orchestrating caller.
/// `RUST_LOG` takes precedence; the trendz crates default to info.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("trendz_ingest=info".parse()?)
                .add_directive("trendz_common=info".parse()?)
                .add_directive("apify_client=info".parse()?),
        )
        .init();
    Ok(())
}
