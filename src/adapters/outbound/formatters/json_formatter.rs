use crate::shared::Result;
use serde::Serialize;

/// JsonFormatter adapter producing pretty-printed JSON
///
/// Used for both the merged SPDX document and the snapshot payload.
/// Output always ends with a newline.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        let mut output = serde_json::to_string_pretty(value)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON output: {}", e))?;
        output.push('\n');
        Ok(output)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}
