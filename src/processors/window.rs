use chrono::{DateTime, Duration, FixedOffset};
use tracing::{debug, warn};

use crate::models::{Measurement, Observation};
use crate::utils::constants::{WINDOW_MINUTES, WINDOW_SLOTS};
use crate::utils::units::{f_to_c, inch_to_mm, mph_to_knots};

/// Four parallel fixed-length series over the trailing hour, oldest first.
///
/// The tail of each series holds the most recent reading; slots with no
/// observation behind them are `Absent`. Speeds are knots, temperatures
/// Celsius, rain rates mm/hr; directions are degrees as supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowedSeries {
    pub speeds: Vec<Measurement>,
    pub directions: Vec<Measurement>,
    pub temperatures: Vec<Measurement>,
    pub rain_rates: Vec<Measurement>,
}

impl WindowedSeries {
    pub fn empty() -> Self {
        Self {
            speeds: vec![Measurement::Absent; WINDOW_SLOTS],
            directions: vec![Measurement::Absent; WINDOW_SLOTS],
            temperatures: vec![Measurement::Absent; WINDOW_SLOTS],
            rain_rates: vec![Measurement::Absent; WINDOW_SLOTS],
        }
    }
}

/// Filters aggregator observations to the trailing window and shapes the
/// per-field series to exactly [`WINDOW_SLOTS`] slots.
pub struct WindowExtractor {
    window: Duration,
}

impl WindowExtractor {
    pub fn new() -> Self {
        Self {
            window: Duration::minutes(WINDOW_MINUTES),
        }
    }

    pub fn with_window(window: Duration) -> Self {
        Self { window }
    }

    /// Extract the trailing-window series relative to an explicit `now`.
    ///
    /// Supplier order is not guaranteed chronological; observations are
    /// visited newest-first by reversing the batch. Entries whose local
    /// timestamp fails to parse are skipped without aborting the batch.
    /// Within a kept observation, a missing field reads as 0 ("no reading"),
    /// while slots with no observation at all stay `Absent`.
    pub fn extract(
        &self,
        observations: &[Observation],
        now: DateTime<FixedOffset>,
    ) -> WindowedSeries {
        let earliest = now - self.window;
        let offset = *now.offset();

        let mut kept: Vec<&Observation> = Vec::new();
        for obs in observations.iter().rev() {
            let Some(ts) = obs.local_time(offset) else {
                warn!("observation with missing or unparsable timestamp skipped");
                continue;
            };
            if ts >= earliest && ts <= now {
                kept.push(obs);
            }
            if kept.len() == WINDOW_SLOTS {
                break;
            }
        }

        debug!("trailing window holds {} observations", kept.len());

        // Newest-first during selection; the series read oldest-first.
        kept.reverse();

        WindowedSeries {
            speeds: shape(&kept, |obs| {
                mph_to_knots(obs.imperial.windspeed_avg).or(Measurement::Present(0.0))
            }),
            directions: shape(&kept, |obs| {
                Measurement::Present(obs.winddir_avg.unwrap_or(0.0))
            }),
            temperatures: shape(&kept, |obs| {
                f_to_c(obs.imperial.temp).or(Measurement::Present(0.0))
            }),
            rain_rates: shape(&kept, |obs| {
                Measurement::Present(inch_to_mm(obs.imperial.precip_rate))
            }),
        }
    }
}

/// Left-pad a kept batch out to the fixed slot count.
fn shape(
    kept: &[&Observation],
    field: impl Fn(&Observation) -> Measurement,
) -> Vec<Measurement> {
    let pad = WINDOW_SLOTS - kept.len();
    std::iter::repeat(Measurement::Absent)
        .take(pad)
        .chain(kept.iter().map(|obs| field(obs)))
        .collect()
}

impl Default for WindowExtractor {
    fn default() -> Self {
        Self::new()
    }
}
