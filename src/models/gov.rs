use serde::Deserialize;

use crate::models::Measurement;
use crate::utils::units::{f_to_c, kmh_to_knots, pa_to_hpa};

/// Raw government observation response: readings live under `properties`,
/// each numeric value wrapped as `{"value": ...}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GovResponse {
    #[serde(default)]
    pub properties: GovProperties,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovProperties {
    #[serde(default)]
    pub temperature: QuantityValue,
    #[serde(default)]
    pub relative_humidity: QuantityValue,
    #[serde(default)]
    pub wind_speed: QuantityValue,
    #[serde(default)]
    pub wind_gust: QuantityValue,
    #[serde(default)]
    pub dewpoint: QuantityValue,
    #[serde(default)]
    pub barometric_pressure: QuantityValue,
    #[serde(default)]
    pub text_description: Option<String>,
    #[serde(default)]
    pub cloud_layers: Vec<CloudLayer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuantityValue {
    #[serde(default)]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CloudLayer {
    #[serde(default)]
    pub base: QuantityValue,
}

/// Normalized official reading: knots, Celsius, hectopascals.
#[derive(Debug, Clone, PartialEq)]
pub struct GovObservation {
    pub temperature_c: Measurement,
    pub humidity: Measurement,
    pub wind_speed_kt: Measurement,
    pub wind_gust_kt: Measurement,
    pub dewpoint_c: Measurement,
    pub pressure_hpa: Measurement,
    pub condition: String,
    pub cloud_base: Measurement,
}

impl Default for GovObservation {
    fn default() -> Self {
        GovProperties::default().normalize()
    }
}

impl GovProperties {
    pub fn normalize(&self) -> GovObservation {
        GovObservation {
            temperature_c: f_to_c(self.temperature.value),
            humidity: Measurement::from(self.relative_humidity.value).map(f64::round),
            wind_speed_kt: kmh_to_knots(self.wind_speed.value),
            wind_gust_kt: kmh_to_knots(self.wind_gust.value),
            dewpoint_c: f_to_c(self.dewpoint.value),
            pressure_hpa: pa_to_hpa(self.barometric_pressure.value),
            condition: self
                .text_description
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            cloud_base: Measurement::from(
                self.cloud_layers.first().and_then(|layer| layer.base.value),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_full_response() {
        let body = serde_json::json!({
            "properties": {
                "temperature": {"value": 77.0},
                "relativeHumidity": {"value": 61.4},
                "windSpeed": {"value": 14.8},
                "windGust": {"value": 25.9},
                "dewpoint": {"value": 64.4},
                "barometricPressure": {"value": 101_820},
                "textDescription": "Partly Cloudy",
                "cloudLayers": [{"base": {"value": 760}}, {"base": {"value": 1500}}]
            }
        });

        let response: GovResponse = serde_json::from_value(body).unwrap();
        let gov = response.properties.normalize();

        assert_eq!(gov.temperature_c, Measurement::Present(25.0));
        assert_eq!(gov.humidity, Measurement::Present(61.0));
        assert_eq!(gov.wind_speed_kt, Measurement::Present(8.0));
        assert_eq!(gov.wind_gust_kt, Measurement::Present(14.0));
        assert_eq!(gov.pressure_hpa, Measurement::Present(1018.2));
        assert_eq!(gov.condition, "Partly Cloudy");
        assert_eq!(gov.cloud_base, Measurement::Present(760.0));
    }

    #[test]
    fn test_normalize_empty_properties() {
        let response: GovResponse = serde_json::from_str("{}").unwrap();
        let gov = response.properties.normalize();

        assert_eq!(gov.temperature_c, Measurement::Absent);
        assert_eq!(gov.humidity, Measurement::Absent);
        assert_eq!(gov.wind_speed_kt, Measurement::Absent);
        assert_eq!(gov.pressure_hpa, Measurement::Absent);
        assert_eq!(gov.condition, "Unknown");
        assert_eq!(gov.cloud_base, Measurement::Absent);
    }

    #[test]
    fn test_null_wrapped_values_are_absent() {
        let body = serde_json::json!({
            "properties": {
                "temperature": {"value": null},
                "cloudLayers": []
            }
        });
        let response: GovResponse = serde_json::from_value(body).unwrap();
        let gov = response.properties.normalize();
        assert_eq!(gov.temperature_c, Measurement::Absent);
        assert_eq!(gov.cloud_base, Measurement::Absent);
    }
}
