use std::fs;
use std::path::Path;

use crate::error::{CdmGuardError, Result};
use crate::message::ConjunctionMessage;
use crate::rules::RuleThresholds;

/// Load and structurally validate a conjunction message from a `.json` or
/// `.toml` file.
///
/// Schema violations (missing fields, wrong-length vectors, unknown fields)
/// surface as [`CdmGuardError::InvalidInput`]: such a file cannot be checked,
/// as opposed to producing FAIL findings.
///
/// # Errors
/// Returns an error if the file cannot be read, has an unsupported extension,
/// or does not satisfy the message schema.
pub fn load_message(path: &Path) -> Result<ConjunctionMessage> {
    let content = read_file(path)?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let msg: ConjunctionMessage = match extension.as_str() {
        "json" => serde_json::from_str(&content).map_err(|e| {
            CdmGuardError::InvalidInput(format!("schema validation failed for {}: {e}", path.display()))
        })?,
        "toml" => toml::from_str(&content).map_err(|e| {
            CdmGuardError::InvalidInput(format!("schema validation failed for {}: {e}", path.display()))
        })?,
        _ => {
            return Err(CdmGuardError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            });
        }
    };

    msg.validate()?;
    Ok(msg)
}

/// Load rule thresholds from a TOML file, or return the defaults when no
/// path is given. Fields not present in the file keep their default values.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid thresholds
/// document.
pub fn load_rules(path: Option<&Path>) -> Result<RuleThresholds> {
    let Some(path) = path else {
        return Ok(RuleThresholds::default());
    };
    let content = read_file(path)?;
    toml::from_str(&content)
        .map_err(|e| CdmGuardError::Rules(format!("invalid rules file {}: {e}", path.display())))
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CdmGuardError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
