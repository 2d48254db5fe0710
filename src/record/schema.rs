use serde::Deserialize;

use crate::error::{PipelineError, Result};
use crate::record::field::Field;

/// Positions the builder and the inspector agree on. The index table is the
/// compatibility surface with the legacy display; growth must never change
/// an existing index's meaning.
pub const IDX_STATION_TOKEN: usize = 32;
pub const IDX_LIGHTNING_COUNT: usize = 36;
pub const IDX_WINDOW_SPEEDS: usize = 46;
pub const IDX_WINDOW_DIRS: usize = 56;
pub const IDX_TRAILING: usize = 66;

/// Output schema variant, implied on the wire by the token count alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u16")]
pub enum SchemaVersion {
    V178,
    V180,
}

impl SchemaVersion {
    pub fn field_count(self) -> usize {
        match self {
            SchemaVersion::V178 => 178,
            SchemaVersion::V180 => 180,
        }
    }

    pub fn from_field_count(count: usize) -> Option<Self> {
        match count {
            178 => Some(SchemaVersion::V178),
            180 => Some(SchemaVersion::V180),
            _ => None,
        }
    }
}

impl TryFrom<u16> for SchemaVersion {
    type Error = PipelineError;

    fn try_from(value: u16) -> Result<Self> {
        SchemaVersion::from_field_count(value as usize)
            .ok_or_else(|| PipelineError::InvalidSchemaVersion(value.to_string()))
    }
}

impl std::fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.field_count())
    }
}

/// Human-readable meaning of a record index, for the inspect command.
pub fn field_label(index: usize) -> &'static str {
    match index {
        0 => "header id",
        1 => "average wind speed (kt)",
        2 => "current wind speed (kt)",
        3 => "wind direction (deg)",
        4 => "outdoor temperature (C)",
        5 => "outdoor humidity (%)",
        6 => "barometer (hPa)",
        7 => "daily rain (mm)",
        8 => "monthly rain (mm)",
        9 => "yearly rain (mm)",
        IDX_STATION_TOKEN => "station name + local time",
        IDX_LIGHTNING_COUNT => "lightning strikes today",
        i if (IDX_WINDOW_SPEEDS..IDX_WINDOW_DIRS).contains(&i) => "hour window wind speed (kt)",
        i if (IDX_WINDOW_DIRS..IDX_TRAILING).contains(&i) => "hour window wind direction (deg)",
        66 => "current wind gust (kt)",
        67 => "dewpoint (C)",
        68 => "cloud base height",
        69 => "max gust today (kt)",
        70 => "max temperature today (C)",
        71 => "min temperature today (C)",
        72 => "average wind direction (deg)",
        73 => "max precip rate today (mm/hr)",
        74 => "feels-like temperature (C)",
        75 => "lightning distance",
        76 => "lightning time",
        77 => "gov temperature (C)",
        78 => "gov humidity (%)",
        79 => "gov wind speed (kt)",
        80 => "gov wind gust (kt)",
        81 => "gov dewpoint (C)",
        82 => "gov pressure (hPa)",
        _ => "reserved",
    }
}

/// The assembled positional record, ready for serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    version: SchemaVersion,
    fields: Vec<Field>,
}

impl Record {
    pub(crate) fn new(version: SchemaVersion, fields: Vec<Field>) -> Result<Self> {
        if fields.len() != version.field_count() {
            return Err(PipelineError::InvalidRecord(format!(
                "expected {} fields for schema {}, got {}",
                version.field_count(),
                version,
                fields.len()
            )));
        }
        Ok(Self { version, fields })
    }

    pub fn version(&self) -> SchemaVersion {
        self.version
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Space-joined wire form, one line, no trailing newline.
    pub fn to_line(&self) -> String {
        self.fields
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
