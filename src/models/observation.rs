use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::utils::constants::OBS_TIME_FORMAT;

/// One timestamped reading from the community aggregator source.
///
/// Unit-bearing fields sit under the `imperial` group; every field is
/// optional because the supplier drops keys freely. Elements that fail to
/// deserialize entirely degrade to an all-absent observation.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    #[serde(default)]
    pub obs_time_local: Option<String>,
    #[serde(default)]
    pub winddir_avg: Option<f64>,
    #[serde(default)]
    pub imperial: ImperialGroup,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImperialGroup {
    #[serde(default)]
    pub windspeed_avg: Option<f64>,
    #[serde(default)]
    pub temp: Option<f64>,
    #[serde(default)]
    pub precip_rate: Option<f64>,
    #[serde(default)]
    pub temp_high: Option<f64>,
    #[serde(default)]
    pub temp_low: Option<f64>,
    #[serde(default)]
    pub windgust_high: Option<f64>,
}

impl Observation {
    /// Decode a raw array element, substituting an all-absent observation
    /// when the element is malformed.
    pub fn from_value(value: Value) -> Self {
        match serde_json::from_value(value) {
            Ok(obs) => obs,
            Err(e) => {
                warn!("skipping malformed observation element: {}", e);
                Observation::default()
            }
        }
    }

    /// Parse the supplier's local timestamp against the given UTC offset.
    ///
    /// The timestamp carries no offset of its own; unparsable or missing
    /// timestamps yield `None` and the observation is skipped by callers.
    pub fn local_time(&self, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
        let raw = self.obs_time_local.as_deref()?;
        let naive = NaiveDateTime::parse_from_str(raw, OBS_TIME_FORMAT).ok()?;
        naive.and_local_timezone(offset).single()
    }
}
