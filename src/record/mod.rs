pub mod builder;
pub mod field;
pub mod schema;

pub use builder::RecordBuilder;
pub use field::Field;
pub use schema::{Record, SchemaVersion};
