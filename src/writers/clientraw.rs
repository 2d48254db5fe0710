use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::record::Record;

/// Serializes a record as one space-joined line, overwriting the target
/// file in full. No append, no rotation.
pub struct ClientrawWriter;

impl ClientrawWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write(&self, record: &Record, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, record.to_line())?;
        info!(
            "wrote {} fields (schema {}) to {}",
            record.fields().len(),
            record.version(),
            path.display()
        );
        Ok(())
    }
}

impl Default for ClientrawWriter {
    fn default() -> Self {
        Self::new()
    }
}
