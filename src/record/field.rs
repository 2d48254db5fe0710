use std::fmt;

use crate::models::Measurement;
use crate::utils::constants::SENTINEL;

/// One positional slot of the output record.
///
/// `Absent` is the internal form of the legacy -100 sentinel; it only turns
/// into the literal at serialization. `Num` renders with one decimal, the
/// precision every converted reading carries; `Int` renders plain.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Absent,
    Int(i64),
    Num(f64),
    Text(String),
}

impl Field {
    /// Integer slot from an optional reading, rounded to the nearest whole.
    pub fn int(value: Option<f64>) -> Field {
        match value {
            Some(v) => Field::Int(v.round() as i64),
            None => Field::Absent,
        }
    }

    /// Integer slot from a measurement (directions, counts, heights).
    pub fn int_measurement(m: Measurement) -> Field {
        Field::int(m.value())
    }
}

impl From<Measurement> for Field {
    fn from(m: Measurement) -> Self {
        match m {
            Measurement::Present(v) => Field::Num(v),
            Measurement::Absent => Field::Absent,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Absent => write!(f, "{}", SENTINEL),
            Field::Int(v) => write!(f, "{}", v),
            Field::Num(v) => write!(f, "{:.1}", v),
            Field::Text(s) => write!(f, "{}", s),
        }
    }
}
