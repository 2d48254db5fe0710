use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, Local, Utc};
use config::{Config, File};
use serde::Deserialize;

use crate::error::{PipelineError, Result};
use crate::record::SchemaVersion;
use crate::utils::constants::{DEFAULT_HEADER_ID, DEFAULT_OUTPUT_FILE};

/// Deployment configuration, layered from defaults and an optional TOML
/// file. Endpoints carry their credentials and station identifiers as query
/// parameters, so everything a deployment needs lives in one file.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub primary_url: String,
    pub aggregator_url: String,
    pub gov_url: String,
    pub output_path: PathBuf,
    /// Fixed UTC offset in hours for the station's local time; system local
    /// time when unset.
    #[serde(default)]
    pub utc_offset_hours: Option<i32>,
    pub schema_version: SchemaVersion,
    pub header_id: i64,
}

impl Settings {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("primary_url", "https://api.ambientweather.net/v1/devices")?
            .set_default(
                "aggregator_url",
                "https://api.weather.com/v2/pws/observations/all/1day",
            )?
            .set_default(
                "gov_url",
                "https://api.weather.gov/stations/KNDZ/observations/latest",
            )?
            .set_default("output_path", DEFAULT_OUTPUT_FILE)?
            .set_default("schema_version", 180i64)?
            .set_default("header_id", DEFAULT_HEADER_ID)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }

    /// The pipeline's "now" in the station's local timezone.
    pub fn local_now(&self) -> Result<DateTime<FixedOffset>> {
        match self.utc_offset_hours {
            Some(hours) => {
                let offset = FixedOffset::east_opt(hours * 3600)
                    .ok_or(PipelineError::InvalidUtcOffset(hours))?;
                Ok(Utc::now().with_timezone(&offset))
            }
            None => Ok(Local::now().fixed_offset()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    
    #[test]
    fn test_defaults() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.output_path, PathBuf::from("clientraw.txt"));
        assert_eq!(settings.schema_version, SchemaVersion::V180);
        assert_eq!(settings.header_id, 12345);
        assert_eq!(settings.utc_offset_hours, None);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
primary_url = "http://localhost:8080/devices"
output_path = "/var/www/clientraw.txt"
utc_offset_hours = -6
schema_version = 178
header_id = 54321
"#
        )
        .unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.primary_url, "http://localhost:8080/devices");
        assert_eq!(settings.output_path, PathBuf::from("/var/www/clientraw.txt"));
        assert_eq!(settings.utc_offset_hours, Some(-6));
        assert_eq!(settings.schema_version, SchemaVersion::V178);
        assert_eq!(settings.header_id, 54321);
    }

    #[test]
    fn test_invalid_schema_version_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "schema_version = 179").unwrap();
        assert!(Settings::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_local_now_uses_configured_offset() {
        let settings = Settings {
            utc_offset_hours: Some(-6),
            ..Settings::load(None).unwrap()
        };
        let now = settings.local_now().unwrap();
        assert_eq!(now.offset().local_minus_utc(), -6 * 3600);
    }

    #[test]
    fn test_invalid_offset_rejected() {
        let settings = Settings {
            utc_offset_hours: Some(30),
            ..Settings::load(None).unwrap()
        };
        assert!(matches!(
            settings.local_now(),
            Err(PipelineError::InvalidUtcOffset(30))
        ));
    }
}
