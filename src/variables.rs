//! Loading of the shared variables file.
//!
//! The variables file is the single YAML document every template is rendered
//! against. It is loaded once per run and shared read-only across all render
//! tasks.

use std::path::Path;

use crate::error::{Error, Result};

/// Loads the variables file at `path` into a generic mapping value.
///
/// Absence of the file is a hard failure for the whole run; there are no
/// default variables.
pub fn load<P: AsRef<Path>>(path: P) -> Result<serde_json::Value> {
    let path = path.as_ref();
    let content =
        std::fs::read_to_string(path).map_err(|source| Error::VariablesReadError {
            path: path.display().to_string(),
            source,
        })?;
    from_str(&content)
}

/// Parses YAML into the variable mapping. The document root must be a
/// mapping; scalars and sequences are rejected.
pub fn from_str(content: &str) -> Result<serde_json::Value> {
    let value: serde_json::Value = serde_yaml::from_str(content)?;
    if !value.is_object() {
        return Err(Error::VariablesParseError(serde::de::Error::custom(
            "variables root must be a mapping",
        )));
    }
    Ok(value)
}
