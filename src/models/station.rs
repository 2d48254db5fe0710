use serde_json::Value;

use crate::error::{PipelineError, Result};
use crate::utils::lookup::{lookup, lookup_f64, lookup_i64, lookup_str};

/// Latest instantaneous reading from the personal weather station source.
///
/// The upstream payload is a JSON array of devices; element 0 carries a
/// `lastData` grab-bag of optional keys plus `info.name`. All readings keep
/// the source units; conversion happens at record assembly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationSnapshot {
    pub name: String,
    pub temp_f: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed_mph: Option<f64>,
    pub wind_gust_mph: Option<f64>,
    pub wind_dir: Option<f64>,
    pub baro_abs_inhg: Option<f64>,
    pub rain_day_in: Option<f64>,
    pub rain_month_in: Option<f64>,
    pub rain_year_in: Option<f64>,
    pub dewpoint_f: Option<f64>,
    pub feels_like_f: Option<f64>,
    pub lightning_day: Option<i64>,
    pub lightning_time: Option<i64>,
    pub lightning_distance: Option<f64>,
}

impl StationSnapshot {
    /// Build a snapshot from the raw device-list response.
    ///
    /// A response without `lastData` or `info.name` on the first device is
    /// the one fatal input error of the pipeline: no record is written.
    pub fn from_response(body: &Value) -> Result<Self> {
        let device = body.get(0).ok_or_else(|| {
            PipelineError::PrimarySource("empty or non-array device response".to_string())
        })?;

        let last = lookup(device, "/lastData").ok_or_else(|| {
            PipelineError::PrimarySource("device response has no lastData".to_string())
        })?;

        let name = lookup_str(device, "/info/name").ok_or_else(|| {
            PipelineError::PrimarySource("device response has no info.name".to_string())
        })?;

        Ok(Self {
            name: name.to_string(),
            temp_f: lookup_f64(last, "/tempf"),
            humidity: lookup_f64(last, "/humidity"),
            wind_speed_mph: lookup_f64(last, "/windspeedmph"),
            wind_gust_mph: lookup_f64(last, "/windgustmph"),
            wind_dir: lookup_f64(last, "/winddir"),
            baro_abs_inhg: lookup_f64(last, "/baromabsin"),
            rain_day_in: lookup_f64(last, "/dailyrainin"),
            rain_month_in: lookup_f64(last, "/monthlyrainin"),
            rain_year_in: lookup_f64(last, "/yearlyrainin"),
            dewpoint_f: lookup_f64(last, "/dewPoint"),
            feels_like_f: lookup_f64(last, "/feelsLike"),
            lightning_day: lookup_i64(last, "/lightning_day"),
            lightning_time: lookup_i64(last, "/lightning_time"),
            lightning_distance: lookup_f64(last, "/lightning_distance"),
        })
    }

    /// Station label as embedded in the record token: lowercased with all
    /// whitespace stripped.
    pub fn token_name(&self) -> String {
        self.name
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect()
    }
}
