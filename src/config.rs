use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Inclusive bounds that mark input is checked against.
///
/// Stored as a JSON object on disk; missing fields take their defaults:
/// ```json
/// { "min": 0.0, "max": 20.0, "enforce": true }
/// ```
///
/// The bounds apply only to input adapters. [`crate::marks::MarkTable`]
/// stores whatever it is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkScale {
    pub min: f64,
    pub max: f64,
    /// When false, out-of-range marks are accepted with a warning.
    pub enforce: bool,
}

impl Default for MarkScale {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 20.0,
            enforce: true,
        }
    }
}

impl MarkScale {
    /// Loads the scale from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read mark scale '{path}'"))?;
        Self::from_json(&content).with_context(|| format!("invalid mark scale '{path}'"))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let scale: MarkScale = serde_json::from_str(content)?;
        if scale.min.is_nan() || scale.max.is_nan() || scale.min > scale.max {
            bail!("min {} and max {} do not form a range", scale.min, scale.max);
        }
        Ok(scale)
    }

    pub fn contains(&self, mark: f64) -> bool {
        (self.min..=self.max).contains(&mark)
    }
}
