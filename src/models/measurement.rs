/// A reading that may or may not be available.
///
/// Upstream sources drop fields freely; internally every numeric reading is
/// carried as a `Measurement` and only collapsed to the legacy -100 sentinel
/// when the record is serialized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    Present(f64),
    Absent,
}

impl Measurement {
    pub fn value(self) -> Option<f64> {
        match self {
            Measurement::Present(v) => Some(v),
            Measurement::Absent => None,
        }
    }

    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Measurement::Present(v) => Measurement::Present(f(v)),
            Measurement::Absent => Measurement::Absent,
        }
    }

    /// First present value wins.
    pub fn or(self, other: Measurement) -> Self {
        match self {
            Measurement::Present(_) => self,
            Measurement::Absent => other,
        }
    }
}

impl From<Option<f64>> for Measurement {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => Measurement::Present(v),
            None => Measurement::Absent,
        }
    }
}
