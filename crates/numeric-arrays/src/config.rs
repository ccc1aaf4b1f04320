use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Controls how arrays are rendered as text.
///
/// Every field is optional when loading from JSON; missing fields take the
/// defaults, which reproduce the plain `Display` output (`[1, 2, 3]`).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FormatConfig {
    /// Digits after the decimal point; ignored for integer elements.
    pub precision: Option<usize>,
    pub separator: String,
    pub open: String,
    pub close: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            precision: None,
            separator: ", ".to_string(),
            open: "[".to_string(),
            close: "]".to_string(),
        }
    }
}

impl FormatConfig {
    pub fn new(precision: Option<usize>) -> Self {
        Self {
            precision,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse format configuration")
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read format configuration: {}", path.display()))?;
        let config = Self::from_json_str(&content)
            .with_context(|| format!("Invalid format configuration: {}", path.display()))?;
        log::debug!("Loaded format configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

/// `Display` adapter pairing array elements with a [`FormatConfig`].
pub struct FormattedArray<'a, T> {
    values: &'a [T],
    config: &'a FormatConfig,
}

impl<'a, T> FormattedArray<'a, T> {
    pub fn new(values: &'a [T], config: &'a FormatConfig) -> Self {
        Self { values, config }
    }
}

impl<'a, T: fmt::Display> fmt::Display for FormattedArray<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.config.open)?;
        for (idx, value) in self.values.iter().enumerate() {
            match self.config.precision {
                Some(precision) => write!(f, "{:.*}", precision, value)?,
                None => write!(f, "{}", value)?,
            }
            if idx + 1 != self.values.len() {
                write!(f, "{}", self.config.separator)?;
            }
        }
        write!(f, "{}", self.config.close)
    }
}
