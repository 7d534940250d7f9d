use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::engine::{CarbonLevelConfig, FactorTables};
use crate::error::Result;

/// Runtime configuration. Missing sections fall back to the built-in tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub tables: FactorTables,
    pub levels: CarbonLevelConfig,
}

impl EngineConfig {
    /// Load and validate a JSON config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: EngineConfig = serde_json::from_str(&content)?;
        config.validate()?;
        info!(path = %path.display(), "loaded engine config");
        Ok(config)
    }

    /// Built-in defaults, or the file at `path` when one is given.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.tables.validate()?;
        self.levels.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CarbonError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_partial_config_file() {
        let json = r#"{"levels": {"thresholds": {"ultra_low": 0.3, "low": 0.8, "medium": 1.5, "high": 100}}}"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.levels.thresholds.low, 0.8);
        assert_eq!(config.levels.colors.low, "#a0d911");
        assert_eq!(config.tables, FactorTables::default());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let json = r#"{"tables": {"baselines": {"素食简餐": -1.0}}}"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(
            EngineConfig::load(file.path()),
            Err(CarbonError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = EngineConfig::load_or_default(None::<&str>).unwrap();
        assert_eq!(config, EngineConfig::default());
    }
}
