//! Shell profiles loaded from TOML.
//!
//! ```toml
//! width = 16
//! height = 16
//! default-view-box = "0 0 16 16"
//! stroke-width = 2
//! ```
//!
//! Missing keys take their defaults; unknown keys are rejected.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::Options;
use crate::error::IconError;

/// Parse a profile from TOML text.
pub fn parse_profile(text: &str) -> Result<Options, IconError> {
    Ok(toml::from_str(text)?)
}

/// Read and parse a profile file.
pub fn load_profile(path: &Path) -> Result<Options, IconError> {
    let text = fs::read_to_string(path)?;
    parse_profile(&text)
}

/// Deserialize an `f64`, rejecting `nan` and `inf`.
pub(crate) fn finite_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let n = f64::deserialize(deserializer)?;
    if n.is_finite() {
        Ok(n)
    } else {
        Err(serde::de::Error::custom(format!("expected a finite number, got {}", n)))
    }
}
