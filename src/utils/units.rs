use crate::models::Measurement;
use crate::utils::constants::{INCH_TO_MM, INHG_TO_HPA, KMH_TO_KNOTS, MPH_TO_KNOTS};

/// Round to one decimal place, the precision the clientraw format carries.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Fahrenheit to Celsius, one decimal. Absent input stays absent.
pub fn f_to_c(fahrenheit: Option<f64>) -> Measurement {
    Measurement::from(fahrenheit).map(|f| round1((f - 32.0) * 5.0 / 9.0))
}

/// Celsius to Fahrenheit, one decimal. Absent input stays absent.
pub fn c_to_f(celsius: Option<f64>) -> Measurement {
    Measurement::from(celsius).map(|c| round1(c * 9.0 / 5.0 + 32.0))
}

/// Miles per hour to knots, one decimal. Absent input stays absent.
pub fn mph_to_knots(mph: Option<f64>) -> Measurement {
    Measurement::from(mph).map(|v| round1(v * MPH_TO_KNOTS))
}

/// Kilometres per hour to knots, one decimal. Absent input stays absent.
pub fn kmh_to_knots(kmh: Option<f64>) -> Measurement {
    Measurement::from(kmh).map(|v| round1(v * KMH_TO_KNOTS))
}

/// Inches to millimetres, one decimal.
///
/// Absent input yields 0.0, not the sentinel: a missing rain total means
/// "no rain", never "unknown".
pub fn inch_to_mm(inches: Option<f64>) -> f64 {
    match inches {
        Some(v) => round1(v * INCH_TO_MM),
        None => 0.0,
    }
}

/// Pascals to hectopascals, one decimal. Absent input stays absent.
pub fn pa_to_hpa(pascals: Option<f64>) -> Measurement {
    Measurement::from(pascals).map(|v| round1(v / 100.0))
}

/// Inches of mercury to hectopascals, one decimal. Absent input stays absent.
pub fn inhg_to_hpa(inhg: Option<f64>) -> Measurement {
    Measurement::from(inhg).map(|v| round1(v * INHG_TO_HPA))
}
