use std::fs;
use std::path::Path;

use super::builtin::sample_log;
use super::error::DatasetError;
use super::types::FlightLog;

/// Name that selects the compiled-in sample log instead of a file.
pub const BUILTIN: &str = "builtin";

impl FlightLog {
    /// Parses a flight log, choosing JSON or YAML by file extension.
    pub fn from_file(path: &Path) -> Result<Self, DatasetError> {
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, DatasetError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn open(source: &str) -> Result<Self, DatasetError> {
        if source == BUILTIN {
            return Ok(sample_log());
        }
        Self::from_file(Path::new(source))
    }

    pub fn load(path: Option<&Path>) -> Result<Self, DatasetError> {
        match path {
            Some(path) => {
                log::info!("Loading flight log from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(sample_log()),
        }
    }
}
