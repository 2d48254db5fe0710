pub mod constants;
pub mod lookup;
pub mod units;

pub use constants::*;
pub use lookup::{lookup, lookup_f64, lookup_i64, lookup_str};
