use crate::error::StrictModeError;
use crate::policy::PolicyConfig;

use super::args::Args;
use super::config::ConfigFile;

/// Resolve the policy config from command line arguments and config file
pub struct ConfigLoader;

impl ConfigLoader {
    /// `--preset` wins over the config file, which wins over the default config
    pub fn load(args: &Args) -> Result<PolicyConfig, StrictModeError> {
        if let Some(preset) = args.preset {
            return Ok(preset.config());
        }

        match args.config.as_ref() {
            Some(path) => Ok(ConfigFile::load(path)?.to_config()),
            None => Ok(PolicyConfig::default()),
        }
    }
}
