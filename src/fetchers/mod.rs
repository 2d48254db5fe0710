pub mod aggregator;
pub mod gov;
pub mod station;

pub use aggregator::AggregatorFetcher;
pub use gov::GovFetcher;
pub use station::StationFetcher;

use std::time::Duration;

use crate::error::Result;
use crate::utils::constants::HTTP_TIMEOUT_SECS;

/// Shared HTTP client for all three sources. The government API rejects
/// requests without a user agent.
pub fn build_client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(concat!("clientraw-bridge/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}
