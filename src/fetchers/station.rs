use reqwest::Client;
use serde_json::Value;
use tracing::info;

use crate::error::Result;
use crate::models::StationSnapshot;

/// Fetches the personal weather station device list (the primary source).
///
/// A structurally invalid response here aborts the whole run; the legacy
/// display keeps showing the previous file.
pub struct StationFetcher {
    client: Client,
    url: String,
}

impl StationFetcher {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub async fn fetch(&self) -> Result<StationSnapshot> {
        info!("fetching station snapshot");
        let body: Value = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let snapshot = StationSnapshot::from_response(&body)?;
        info!(station = %snapshot.name, "station snapshot fetched");
        Ok(snapshot)
    }
}
