pub mod gov;
pub mod measurement;
pub mod observation;
pub mod station;

pub use gov::{CloudLayer, GovObservation, GovProperties, GovResponse, QuantityValue};
pub use measurement::Measurement;
pub use observation::{ImperialGroup, Observation};
pub use station::StationSnapshot;
