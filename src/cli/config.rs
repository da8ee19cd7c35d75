use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    error::StrictModeError,
    policy::{PolicyConfig, Preset},
};

/// On-disk configuration
///
/// ```toml
/// preset = "development"
///
/// [policy]
/// detect_network = false
/// penalty_death = true
/// ```
///
/// A `[policy]` table starts from the default config; keys it omits keep
/// their default values.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub preset: Option<Preset>,
    #[serde(default)]
    pub policy: Option<PolicyConfig>,
}

impl ConfigFile {
    /// Load configuration file
    pub fn load(path: &Path) -> Result<Self, StrictModeError> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| StrictModeError::ConfigParse {
            path: PathBuf::from(path),
            source,
        })
    }

    /// Resolve the config: an explicit `[policy]` table wins over `preset`
    pub fn to_config(&self) -> PolicyConfig {
        match (self.policy, self.preset) {
            (Some(policy), _) => policy,
            (None, Some(preset)) => preset.config(),
            (None, None) => PolicyConfig::default(),
        }
    }
}
