use reqwest::Client;
use tracing::info;

use crate::error::Result;
use crate::models::{GovObservation, GovResponse};

/// Fetches the latest official observation from the government network.
pub struct GovFetcher {
    client: Client,
    url: String,
}

impl GovFetcher {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub async fn fetch(&self) -> Result<GovObservation> {
        info!("fetching government observation");
        let response: GovResponse = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let observation = response.properties.normalize();
        info!(condition = %observation.condition, "government observation fetched");
        Ok(observation)
    }
}
