use crate::models::{Measurement, Observation, StationSnapshot};
use crate::processors::window::WindowedSeries;
use crate::utils::units::{f_to_c, inch_to_mm, mph_to_knots, round1};

/// Derived extremes over the full day's observations plus the windowed
/// average wind direction.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub max_temp_c: Measurement,
    pub min_temp_c: Measurement,
    pub max_gust_kt: Measurement,
    pub max_rain_rate_mm: Measurement,
    pub avg_wind_dir: Measurement,
}

pub struct DailyAggregator;

impl DailyAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Summarize the day's observations.
    ///
    /// Extremes skip absent readings; an empty or all-missing dataset yields
    /// `Absent` (the -100 sentinel on the wire) rather than failing. The
    /// average direction counts only strictly positive window readings - 0
    /// is "no reading", not due north - and falls back to the station's
    /// instantaneous direction when no positive reading exists.
    pub fn summarize(
        &self,
        observations: &[Observation],
        window: &WindowedSeries,
        station: &StationSnapshot,
    ) -> DailySummary {
        DailySummary {
            max_temp_c: f_to_c(fold_extreme(observations, f64::max, |obs| {
                obs.imperial.temp_high
            })),
            min_temp_c: f_to_c(fold_extreme(observations, f64::min, |obs| {
                obs.imperial.temp_low
            })),
            max_gust_kt: mph_to_knots(fold_extreme(observations, f64::max, |obs| {
                obs.imperial.windgust_high
            })),
            max_rain_rate_mm: fold_extreme(observations, f64::max, |obs| obs.imperial.precip_rate)
                .map(|v| Measurement::Present(inch_to_mm(Some(v))))
                .unwrap_or(Measurement::Absent),
            avg_wind_dir: average_direction(&window.directions)
                .or(Measurement::from(station.wind_dir)),
        }
    }
}

impl Default for DailyAggregator {
    fn default() -> Self {
        Self::new()
    }
}

fn fold_extreme(
    observations: &[Observation],
    pick: fn(f64, f64) -> f64,
    field: impl Fn(&Observation) -> Option<f64>,
) -> Option<f64> {
    observations
        .iter()
        .filter_map(field)
        .reduce(pick)
        .map(round1)
}

/// Mean of the strictly positive direction slots, rounded to whole degrees.
fn average_direction(directions: &[Measurement]) -> Measurement {
    let positive: Vec<f64> = directions
        .iter()
        .filter_map(|m| m.value())
        .filter(|d| *d > 0.0)
        .collect();

    if positive.is_empty() {
        Measurement::Absent
    } else {
        let mean = positive.iter().sum::<f64>() / positive.len() as f64;
        Measurement::Present(mean.round())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn obs_with_extremes(high: f64, low: f64, gust: f64) -> Observation {
        Observation::from_value(json!({
            "imperial": {"tempHigh": high, "tempLow": low, "windgustHigh": gust}
        }))
    }

    fn window_with_dirs(dirs: &[f64]) -> WindowedSeries {
        let mut window = WindowedSeries::empty();
        let start = window.directions.len() - dirs.len();
        for (slot, dir) in window.directions[start..].iter_mut().zip(dirs) {
            *slot = Measurement::Present(*dir);
        }
        window
    }

    #[test]
    fn test_extremes_over_day() {
        let observations = vec![
            obs_with_extremes(80.6, 60.8, 10.0),
            obs_with_extremes(91.4, 59.0, 25.0),
            obs_with_extremes(86.0, 62.6, 18.0),
        ];

        let summary = DailyAggregator::new().summarize(
            &observations,
            &WindowedSeries::empty(),
            &StationSnapshot::default(),
        );

        assert_eq!(summary.max_temp_c, Measurement::Present(33.0));
        assert_eq!(summary.min_temp_c, Measurement::Present(15.0));
        assert_eq!(summary.max_gust_kt, mph_to_knots(Some(25.0)));
    }

    #[test]
    fn test_empty_dataset_yields_sentinel() {
        let summary = DailyAggregator::new().summarize(
            &[],
            &WindowedSeries::empty(),
            &StationSnapshot::default(),
        );

        assert_eq!(summary.max_temp_c, Measurement::Absent);
        assert_eq!(summary.min_temp_c, Measurement::Absent);
        assert_eq!(summary.max_gust_kt, Measurement::Absent);
        assert_eq!(summary.max_rain_rate_mm, Measurement::Absent);
        assert_eq!(summary.avg_wind_dir, Measurement::Absent);
    }

    #[test]
    fn test_all_missing_fields_yield_sentinel() {
        let observations = vec![Observation::default(), Observation::default()];
        let summary = DailyAggregator::new().summarize(
            &observations,
            &WindowedSeries::empty(),
            &StationSnapshot::default(),
        );
        assert_eq!(summary.max_temp_c, Measurement::Absent);
        assert_eq!(summary.max_rain_rate_mm, Measurement::Absent);
    }

    #[test]
    fn test_average_direction_over_positive_readings() {
        let window = window_with_dirs(&[90.0, 0.0, 180.0, 270.0]);
        let summary =
            DailyAggregator::new().summarize(&[], &window, &StationSnapshot::default());
        assert_eq!(summary.avg_wind_dir, Measurement::Present(180.0));
    }

    #[test]
    fn test_average_direction_fallback_to_instantaneous() {
        let window = window_with_dirs(&[0.0, 0.0, 0.0]);
        let station = StationSnapshot {
            wind_dir: Some(270.0),
            ..Default::default()
        };
        let summary = DailyAggregator::new().summarize(&[], &window, &station);
        assert_eq!(summary.avg_wind_dir, Measurement::Present(270.0));
    }

    #[test]
    fn test_average_direction_no_fallback_available() {
        let window = window_with_dirs(&[0.0, 0.0]);
        let summary =
            DailyAggregator::new().summarize(&[], &window, &StationSnapshot::default());
        assert_eq!(summary.avg_wind_dir, Measurement::Absent);
    }

    #[test]
    fn test_max_rain_rate_converted_to_mm() {
        let observations = vec![
            Observation::from_value(json!({"imperial": {"precipRate": 0.1}})),
            Observation::from_value(json!({"imperial": {"precipRate": 0.5}})),
        ];
        let summary = DailyAggregator::new().summarize(
            &observations,
            &WindowedSeries::empty(),
            &StationSnapshot::default(),
        );
        assert_eq!(summary.max_rain_rate_mm, Measurement::Present(12.7));
    }
}
