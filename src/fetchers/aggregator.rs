use reqwest::Client;
use serde_json::Value;
use tracing::info;

use crate::error::Result;
use crate::models::Observation;
use crate::utils::lookup::lookup;

/// Fetches the community aggregator's day of timestamped observations.
///
/// A missing or non-array `observations` key degrades to an empty batch;
/// transport and JSON failures propagate and abort the run.
pub struct AggregatorFetcher {
    client: Client,
    url: String,
}

impl AggregatorFetcher {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub async fn fetch(&self) -> Result<Vec<Observation>> {
        info!("fetching aggregator observations");
        let body: Value = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let observations = Self::parse_observations(&body);
        info!("fetched {} aggregator observations", observations.len());
        Ok(observations)
    }

    fn parse_observations(body: &Value) -> Vec<Observation> {
        lookup(body, "/observations")
            .and_then(Value::as_array)
            .map(|elements| {
                elements
                    .iter()
                    .cloned()
                    .map(Observation::from_value)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_observations() {
        let body = json!({
            "observations": [
                {"obsTimeLocal": "2024-06-01 14:05:00", "winddirAvg": 190},
                {"obsTimeLocal": "2024-06-01 14:10:00", "winddirAvg": 200}
            ]
        });

        let observations = AggregatorFetcher::parse_observations(&body);
        assert_eq!(observations.len(), 2);
        assert_eq!(observations[1].winddir_avg, Some(200.0));
    }

    #[test]
    fn test_missing_observations_key_is_empty_batch() {
        assert_eq!(
            AggregatorFetcher::parse_observations(&json!({})),
            Vec::new()
        );
        assert_eq!(
            AggregatorFetcher::parse_observations(&json!({"observations": "oops"})),
            Vec::new()
        );
    }

    #[test]
    fn test_malformed_elements_degrade_individually() {
        let body = json!({
            "observations": [
                {"winddirAvg": 45},
                17,
                {"winddirAvg": 90}
            ]
        });

        let observations = AggregatorFetcher::parse_observations(&body);
        assert_eq!(observations.len(), 3);
        assert_eq!(observations[0].winddir_avg, Some(45.0));
        assert_eq!(observations[1], Observation::default());
        assert_eq!(observations[2].winddir_avg, Some(90.0));
    }
}
