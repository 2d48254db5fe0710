use chrono::{DateTime, FixedOffset};

use crate::error::Result;
use crate::models::{GovObservation, StationSnapshot};
use crate::processors::{DailySummary, WindowedSeries};
use crate::record::field::Field;
use crate::record::schema::{
    Record, SchemaVersion, IDX_LIGHTNING_COUNT, IDX_STATION_TOKEN, IDX_WINDOW_SPEEDS,
};
use crate::utils::constants::DEFAULT_HEADER_ID;
use crate::utils::units::{f_to_c, inch_to_mm, inhg_to_hpa, mph_to_knots};

/// Assembles the flat positional record from the normalized inputs.
///
/// Assembly is strictly order-dependent: values land at absolute indices
/// with sentinel runs in between, per the layout table in the schema module.
pub struct RecordBuilder {
    version: SchemaVersion,
    header_id: i64,
}

impl RecordBuilder {
    pub fn new(version: SchemaVersion) -> Self {
        Self {
            version,
            header_id: DEFAULT_HEADER_ID,
        }
    }

    pub fn with_header_id(mut self, header_id: i64) -> Self {
        self.header_id = header_id;
        self
    }

    pub fn build(
        &self,
        station: &StationSnapshot,
        window: &WindowedSeries,
        summary: &DailySummary,
        gov: &GovObservation,
        now: DateTime<FixedOffset>,
    ) -> Result<Record> {
        let mut fields: Vec<Field> = Vec::with_capacity(self.version.field_count());

        // 0-6: core instantaneous readings
        fields.push(Field::Int(self.header_id));
        let wind_kt = mph_to_knots(station.wind_speed_mph);
        fields.push(wind_kt.into());
        fields.push(wind_kt.into());
        fields.push(Field::int(station.wind_dir));
        fields.push(f_to_c(station.temp_f).into());
        fields.push(Field::int(station.humidity));
        fields.push(inhg_to_hpa(station.baro_abs_inhg).into());

        // 7-9: rain totals, absence means no rain
        fields.push(Field::Num(inch_to_mm(station.rain_day_in)));
        fields.push(Field::Num(inch_to_mm(station.rain_month_in)));
        fields.push(Field::Num(inch_to_mm(station.rain_year_in)));

        // 32: station name + local 12-hour time as one comma-joined token
        pad_to(&mut fields, IDX_STATION_TOKEN);
        fields.push(Field::Text(station_token(station, now)));

        // 36: lightning strike count for the day
        pad_to(&mut fields, IDX_LIGHTNING_COUNT);
        fields.push(Field::Int(station.lightning_day.unwrap_or(0)));

        // 46-55 / 56-65: trailing-hour wind speed and direction windows
        pad_to(&mut fields, IDX_WINDOW_SPEEDS);
        fields.extend(window.speeds.iter().map(|m| Field::from(*m)));
        fields.extend(window.directions.iter().map(|m| Field::int_measurement(*m)));

        // 66-68: gust, dewpoint, cloud base, at their legacy positions
        fields.push(mph_to_knots(station.wind_gust_mph).into());
        fields.push(f_to_c(station.dewpoint_f).into());
        fields.push(Field::int_measurement(gov.cloud_base));

        // 69-82: daily summary, remaining station readings, official readings
        fields.push(summary.max_gust_kt.into());
        fields.push(summary.max_temp_c.into());
        fields.push(summary.min_temp_c.into());
        fields.push(Field::int_measurement(summary.avg_wind_dir));
        fields.push(summary.max_rain_rate_mm.into());
        fields.push(f_to_c(station.feels_like_f).into());
        fields.push(Field::Int(
            station
                .lightning_distance
                .map(|v| v.round() as i64)
                .unwrap_or(0),
        ));
        fields.push(Field::Int(station.lightning_time.unwrap_or(0)));
        fields.push(gov.temperature_c.into());
        fields.push(Field::Int(
            gov.humidity.value().map(|v| v as i64).unwrap_or(0),
        ));
        fields.push(gov.wind_speed_kt.into());
        fields.push(gov.wind_gust_kt.into());
        fields.push(gov.dewpoint_c.into());
        fields.push(gov.pressure_hpa.into());

        // sentinel pad to the version's total
        pad_to(&mut fields, self.version.field_count());

        Record::new(self.version, fields)
    }
}

fn pad_to(fields: &mut Vec<Field>, index: usize) {
    while fields.len() < index {
        fields.push(Field::Absent);
    }
}

fn station_token(station: &StationSnapshot, now: DateTime<FixedOffset>) -> String {
    format!(
        "{},fl-{}",
        station.token_name(),
        now.format("%I:%M:%S_%p")
    )
}
