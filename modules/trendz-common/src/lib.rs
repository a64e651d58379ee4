pub mod config;
pub mod error;
pub mod niches;
pub mod telemetry;
pub mod types;

pub use config::Config;
pub use error::StorageError;
pub use types::*;
