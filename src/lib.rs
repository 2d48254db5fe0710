pub mod cli;
pub mod config;
pub mod error;
pub mod fetchers;
pub mod models;
pub mod processors;
pub mod record;
pub mod utils;
pub mod writers;

pub use error::{PipelineError, Result};
