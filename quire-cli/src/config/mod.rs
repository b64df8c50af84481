//! Configuration file support
//!
//! Marker and rule defaults may come from a TOML file; command-line flags
//! always win over file values.

use crate::error::{CliError, CliResult};
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Defaults loaded from a `--config` TOML file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Word that closes a section when it stands alone
    pub section_marker: Option<String>,
    /// Word that closes a chapter when it stands alone
    pub chapter_marker: Option<String>,
    /// Regular expression that starts a new chapter when it matches a sentence
    pub chapter_rule: Option<String>,
}

impl FileConfig {
    /// Load and parse a configuration file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&raw)
            .map_err(|e| CliError::ConfigError(e.to_string()))
            .with_context(|| format!("invalid config file: {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_partial_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "section_marker = \"****\"").unwrap();
        let config = FileConfig::load(file.path()).unwrap();
        assert_eq!(config.section_marker.as_deref(), Some("****"));
        assert_eq!(config.chapter_marker, None);
        assert_eq!(config.chapter_rule, None);
    }

    #[test]
    fn rejects_unknown_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sectoin_marker = \"oops\"").unwrap();
        assert!(FileConfig::load(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = FileConfig::load(Path::new("/no/such/quire.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
