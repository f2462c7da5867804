use crate::error::{CabinetError, Result};
use crate::validation::ValidationMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for cabinet, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CabinetConfig {
    /// Rule set used when no `--validation-rules` flag is given
    #[serde(default)]
    pub validation_rules: ValidationMode,

    /// Where `export` puts files given as bare names
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for CabinetConfig {
    fn default() -> Self {
        Self {
            validation_rules: ValidationMode::default(),
            export_dir: default_export_dir(),
        }
    }
}

impl CabinetConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: CabinetConfig = serde_json::from_str(&content)?;
        config.check()?;
        Ok(config)
    }

    /// Resolve an export target: relative paths land in `export_dir`.
    pub fn export_path<P: AsRef<Path>>(&self, target: P) -> PathBuf {
        let target = target.as_ref();
        if target.is_absolute() {
            target.to_path_buf()
        } else {
            self.export_dir.join(target)
        }
    }

    fn check(&self) -> Result<()> {
        if self.export_dir.as_os_str().is_empty() {
            return Err(CabinetError::Config("export_dir cannot be empty".into()));
        }
        Ok(())
    }
}
